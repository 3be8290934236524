//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module.

mod calendar_event;
mod connection;
mod helpers;
mod note;
mod task;

#[cfg(test)]
mod calendar_event_test;

pub use calendar_event::SqliteCalendarEventRepository;
pub use connection::SqliteDatabase;
pub use note::SqliteNoteRepository;
pub use task::SqliteTaskRepository;
