//! API error types.
//!
//! `ApiError` covers server startup; `HandlerError` covers a single request
//! and maps to a bare status code. Error detail is logged, never returned.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use thiserror::Error;
use tracing::{error, warn};

use crate::db::DbError;

/// Fatal startup failures, surfaced to whoever launched the server.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("No free port in range {start}..={end}")]
    #[diagnostic(
        code(neofocus::api::ports_exhausted),
        help("Close whatever is listening on these ports and restart")
    )]
    PortsExhausted { start: u16, end: u16 },

    #[error("Application files not found at {}", path.display())]
    #[diagnostic(
        code(neofocus::api::assets_not_found),
        help("Build the front end or pass --assets pointing at its output directory")
    )]
    AssetsNotFound { path: PathBuf },

    #[error("Server I/O error: {0}")]
    #[diagnostic(code(neofocus::api::io))]
    Io(#[from] std::io::Error),
}

/// Failure while handling one request.
#[derive(Error, Diagnostic, Debug)]
pub enum HandlerError {
    #[error("Malformed request body: {0}")]
    #[diagnostic(code(neofocus::api::malformed_body))]
    MalformedBody(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),
}

impl HandlerError {
    /// Status code for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            HandlerError::Db(DbError::Validation { .. }) => StatusCode::BAD_REQUEST,
            HandlerError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "rejected request");
        }
        status.into_response()
    }
}
