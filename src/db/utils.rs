//! Database utility functions.

use chrono::{SecondsFormat, Utc};

/// Default location of the database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "data/neofocus.db";

/// Environment variable overriding [`DEFAULT_DB_PATH`].
pub const DB_PATH_ENV: &str = "NEOFOCUS_DB";

/// Get current UTC datetime as an RFC 3339 string with millisecond precision.
///
/// The fixed width keeps lexicographic order equal to chronological order,
/// which the notes listing relies on.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resolve the database path: explicit value, then `NEOFOCUS_DB`, then the default.
pub fn resolve_db_path(explicit: Option<std::path::PathBuf>) -> std::path::PathBuf {
    explicit
        .or_else(|| std::env::var_os(DB_PATH_ENV).map(Into::into))
        .unwrap_or_else(|| DEFAULT_DB_PATH.into())
}
