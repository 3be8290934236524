//! SQLite TaskRepository implementation.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use super::helpers::map_sqlx_error;
use crate::db::{DbResult, NewTask, Task, TaskRepository};

/// SQLx-backed task repository.
pub struct SqliteTaskRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn task_from_row(row: &SqliteRow) -> Task {
    Task {
        id: row.get("id"),
        title: row.get("title"),
        completed: row.get("completed"),
        category: row.get("category"),
        start_time: row.get("startTime"),
        end_time: row.get("endTime"),
    }
}

impl<'a> TaskRepository for SqliteTaskRepository<'a> {
    async fn create(&self, task: &NewTask) -> DbResult<i64> {
        task.validate()?;

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, completed, category, startTime, endTime)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&task.title)
        .bind(false)
        .bind(&task.category)
        .bind(&task.start_time)
        .bind(&task.end_time)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> DbResult<Vec<Task>> {
        let rows = sqlx::query(
            "SELECT id, title, completed, category, startTime, endTime FROM tasks ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(task_from_row).collect())
    }

    async fn update(&self, task: &Task) -> DbResult<bool> {
        task.validate()?;

        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, completed = ?, category = ?, startTime = ?, endTime = ?
            WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(task.completed)
        .bind(&task.category)
        .bind(&task.start_time)
        .bind(&task.end_time)
        .bind(task.id)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
