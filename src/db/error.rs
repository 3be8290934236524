//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity already exists: {entity_type} with id '{id}'")]
    #[diagnostic(code(neofocus::db::already_exists))]
    AlreadyExists { entity_type: String, id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(neofocus::db::validation_error))]
    Validation { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(neofocus::db::constraint))]
    Constraint { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(neofocus::db::database_error))]
    Database { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(neofocus::db::connection_error),
        help("Check that the database directory is writable")
    )]
    Connection { message: String },
}

impl DbError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        DbError::Validation {
            message: message.into(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
