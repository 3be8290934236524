//! SQLite CalendarEventRepository implementation.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use super::helpers::map_sqlx_error;
use crate::db::{CalendarEvent, CalendarEventRepository, DbResult, NewCalendarEvent};

/// SQLx-backed calendar event repository.
pub struct SqliteCalendarEventRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn event_from_row(row: &SqliteRow) -> CalendarEvent {
    CalendarEvent {
        id: row.get("id"),
        title: row.get("title"),
        date: row.get("date"),
        time: row.get("time"),
        category: row.get("category"),
        recurring: row.get("recurring"),
    }
}

impl<'a> CalendarEventRepository for SqliteCalendarEventRepository<'a> {
    async fn create(&self, event: &NewCalendarEvent) -> DbResult<i64> {
        event.validate()?;

        let result = sqlx::query(
            r#"
            INSERT INTO calendar_events (title, date, time, category, recurring)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.title)
        .bind(&event.date)
        .bind(&event.time)
        .bind(&event.category)
        .bind(&event.recurring)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> DbResult<Vec<CalendarEvent>> {
        let rows = sqlx::query(
            "SELECT id, title, date, time, category, recurring FROM calendar_events ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(event_from_row).collect())
    }

    async fn update(&self, event: &CalendarEvent) -> DbResult<bool> {
        event.validate()?;

        let result = sqlx::query(
            r#"
            UPDATE calendar_events
            SET title = ?, date = ?, time = ?, category = ?, recurring = ?
            WHERE id = ?
            "#,
        )
        .bind(&event.title)
        .bind(&event.date)
        .bind(&event.time)
        .bind(&event.category)
        .bind(&event.recurring)
        .bind(event.id)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM calendar_events WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
