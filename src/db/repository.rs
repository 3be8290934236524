//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the API layer.
//!
//! Every operation is a single statement. `update` and `delete` report
//! whether a row matched instead of failing on a miss.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{CalendarEvent, NewCalendarEvent, NewTask, Note, Task},
};

/// Repository for Task operations.
pub trait TaskRepository {
    /// Insert a new, incomplete task and return its assigned id.
    fn create(&self, task: &NewTask) -> impl Future<Output = DbResult<i64>> + Send;

    /// Get all tasks, oldest first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// Replace every mutable field of the task with `task.id`.
    fn update(&self, task: &Task) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a task by ID.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository for CalendarEvent operations.
pub trait CalendarEventRepository {
    /// Insert a new event and return its assigned id.
    fn create(&self, event: &NewCalendarEvent) -> impl Future<Output = DbResult<i64>> + Send;

    /// Get all events, oldest first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<CalendarEvent>>> + Send;

    /// Replace every mutable field of the event with `event.id`.
    fn update(&self, event: &CalendarEvent) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete an event by ID.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository for Note operations.
pub trait NoteRepository {
    /// Insert a note under its caller-supplied id and echo that id back.
    fn create(&self, note: &Note) -> impl Future<Output = DbResult<String>> + Send;

    /// Get all notes, most recently updated first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Note>>> + Send;

    /// Replace title, content, tags and category, and bump `updated_at`.
    fn update(&self, note: &Note) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a note by ID.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync + 'static {
    type Tasks<'a>: TaskRepository + Send + Sync
    where
        Self: 'a;
    type CalendarEvents<'a>: CalendarEventRepository + Send + Sync
    where
        Self: 'a;
    type Notes<'a>: NoteRepository + Send + Sync
    where
        Self: 'a;

    /// Create the schema if it is absent. Safe to call repeatedly.
    fn initialize(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the task repository.
    fn tasks(&self) -> Self::Tasks<'_>;

    /// Get the calendar event repository.
    fn calendar_events(&self) -> Self::CalendarEvents<'_>;

    /// Get the note repository.
    fn notes(&self) -> Self::Notes<'_>;
}
