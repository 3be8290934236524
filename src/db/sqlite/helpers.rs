//! Shared helper functions for SQLite repositories.

use sqlx::error::ErrorKind;

use crate::db::{DbError, TAG_DELIMITER};

/// Classify a sqlx error into the storage-agnostic taxonomy.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    match e.as_database_error().map(|db| db.kind()) {
        Some(ErrorKind::UniqueViolation)
        | Some(ErrorKind::NotNullViolation)
        | Some(ErrorKind::CheckViolation)
        | Some(ErrorKind::ForeignKeyViolation) => DbError::Constraint {
            message: e.to_string(),
        },
        _ => DbError::Database {
            message: e.to_string(),
        },
    }
}

/// Like [`map_sqlx_error`], but report a unique violation as a duplicate id.
pub fn map_insert_error(e: sqlx::Error, entity_type: &str, id: &str) -> DbError {
    let duplicate = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if duplicate {
        DbError::AlreadyExists {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    } else {
        map_sqlx_error(e)
    }
}

/// Join tags into their column representation.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_DELIMITER)
}

/// Split a stored tags column back into the ordered tag list.
///
/// NULL and the empty string both mean "no tags".
pub fn split_tags(stored: Option<&str>) -> Vec<String> {
    match stored {
        None | Some("") => Vec::new(),
        Some(s) => s.split(TAG_DELIMITER).map(str::to_string).collect(),
    }
}
