//! Request handlers for the eight API routes.

mod calendar_events;
mod notes;
mod tasks;

#[cfg(test)]
mod notes_test;
#[cfg(test)]
pub(crate) mod test_support;

pub use calendar_events::*;
pub use notes::*;
pub use tasks::*;

use axum::body::Bytes;
use serde::{Serialize, de::DeserializeOwned};
use utoipa::ToSchema;

use super::error::HandlerError;

/// Body of a 201 response for server-assigned ids.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = 1)]
    pub id: i64,
}

/// Parse a JSON request body regardless of the Content-Type header.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, HandlerError> {
    Ok(serde_json::from_slice(body)?)
}
