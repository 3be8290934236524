//! SQLite database connection and schema management.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::debug;

use super::{SqliteCalendarEventRepository, SqliteNoteRepository, SqliteTaskRepository};
use crate::db::{Database, DbError, DbResult};

const SCHEMA: &str = include_str!("schema.sql");

/// SQLite database implementation.
///
/// Owns the connection pool; repositories borrow it, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (or create) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Connection {
                    message: format!("Failed to create {}: {}", parent.display(), e),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        debug!("Opened database at {}", path.display());
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every `:memory:` connection is a separate database, so the pool holds
    /// exactly one connection and never recycles it.
    pub async fn in_memory() -> DbResult<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Access the underlying pool for direct queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Tasks<'a> = SqliteTaskRepository<'a>;
    type CalendarEvents<'a> = SqliteCalendarEventRepository<'a>;
    type Notes<'a> = SqliteNoteRepository<'a>;

    async fn initialize(&self) -> DbResult<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: format!("Failed to create schema: {}", e),
            })?;
        Ok(())
    }

    fn tasks(&self) -> Self::Tasks<'_> {
        SqliteTaskRepository { pool: &self.pool }
    }

    fn calendar_events(&self) -> Self::CalendarEvents<'_> {
        SqliteCalendarEventRepository { pool: &self.pool }
    }

    fn notes(&self) -> Self::Notes<'_> {
        SqliteNoteRepository { pool: &self.pool }
    }
}
