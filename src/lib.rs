//! NEO FOCUS local persistence and API layer.
//!
//! - [`db`]: SQLite-backed storage for tasks, calendar events and notes
//! - [`api`]: loopback HTTP+JSON server in front of the storage

pub mod api;
pub mod db;
