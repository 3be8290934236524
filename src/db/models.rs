//! Domain models for the neofocus database.
//!
//! These models are storage-agnostic and represent the three independent
//! entities persisted by the application. None of them reference each other.

use serde::{Deserialize, Serialize};

use super::{DbError, DbResult};

/// Delimiter used to join note tags into a single column value.
pub const TAG_DELIMITER: &str = ",";

/// A daily-schedule task. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub category: Option<String>,
    /// Opaque time-of-day strings, never interpreted.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Fields accepted when adding a task. New tasks always start incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub category: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// A calendar entry. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub category: Option<String>,
    /// Recurrence rule, stored verbatim.
    pub recurring: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalendarEvent {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub category: Option<String>,
    pub recurring: Option<String>,
}

/// A rich-text note. The id is chosen by the caller.
///
/// `content` is expected to be sanitized HTML by the time it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

fn require_non_empty(value: &str, field: &str) -> DbResult<()> {
    if value.trim().is_empty() {
        return Err(DbError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl NewTask {
    pub fn validate(&self) -> DbResult<()> {
        require_non_empty(&self.title, "title")
    }
}

impl Task {
    pub fn validate(&self) -> DbResult<()> {
        require_non_empty(&self.title, "title")
    }
}

impl NewCalendarEvent {
    pub fn validate(&self) -> DbResult<()> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.date, "date")
    }
}

impl CalendarEvent {
    pub fn validate(&self) -> DbResult<()> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.date, "date")
    }
}

impl Note {
    /// Check the id and the tag invariants.
    ///
    /// Tags are stored joined by [`TAG_DELIMITER`] with no escaping, so a tag
    /// holding the delimiter (or an empty tag) would not read back the same.
    pub fn validate(&self) -> DbResult<()> {
        require_non_empty(&self.id, "id")?;
        for tag in &self.tags {
            if tag.is_empty() {
                return Err(DbError::validation("tags cannot be empty strings"));
            }
            if tag.contains(TAG_DELIMITER) {
                return Err(DbError::validation(format!(
                    "tag '{tag}' contains the reserved delimiter '{TAG_DELIMITER}'"
                )));
            }
        }
        Ok(())
    }
}
