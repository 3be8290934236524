//! SQLite NoteRepository implementation.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use tracing::debug;

use super::helpers::{join_tags, map_insert_error, map_sqlx_error, split_tags};
use crate::db::utils::current_timestamp;
use crate::db::{DbResult, Note, NoteRepository};

/// SQLx-backed note repository.
pub struct SqliteNoteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn note_from_row(row: &SqliteRow) -> Note {
    let tags: Option<String> = row.get("tags");
    let content: Option<String> = row.get("content");

    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: content.unwrap_or_default(),
        tags: split_tags(tags.as_deref()),
        category: row.get("category"),
        created_at: row.get("createdAt"),
        updated_at: row.get("updatedAt"),
    }
}

impl<'a> NoteRepository for SqliteNoteRepository<'a> {
    async fn create(&self, note: &Note) -> DbResult<String> {
        note.validate()?;

        // Keep caller timestamps when present, otherwise stamp now
        let now = current_timestamp();
        let created_at = Some(note.created_at.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(now.as_str());
        let updated_at = Some(note.updated_at.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(created_at);

        sqlx::query(
            r#"
            INSERT INTO notes (id, title, content, tags, category, createdAt, updatedAt)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&note.id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(join_tags(&note.tags))
        .bind(&note.category)
        .bind(created_at)
        .bind(updated_at)
        .execute(self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Note", &note.id))?;

        Ok(note.id.clone())
    }

    async fn list(&self) -> DbResult<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, title, content, tags, category, createdAt, updatedAt
             FROM notes ORDER BY updatedAt DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn update(&self, note: &Note) -> DbResult<bool> {
        note.validate()?;

        // createdAt is never touched; updatedAt always reflects this write
        let result = sqlx::query(
            r#"
            UPDATE notes
            SET title = ?, content = ?, tags = ?, category = ?, updatedAt = ?
            WHERE id = ?
            "#,
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(join_tags(&note.tags))
        .bind(&note.category)
        .bind(current_timestamp())
        .bind(&note.id)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            debug!(note_id = %note.id, "update matched no note");
        }

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
