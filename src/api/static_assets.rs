//! Front-end asset serving.
//!
//! Every path the route table does not claim lands here. API paths never
//! fall through to the file system.

use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// True for `/api` and anything below it.
pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Serve a file from the asset directory, or 404 for unmatched API paths.
///
/// Directories resolve to their `index.html`.
pub async fn serve_static(assets: ServeDir, req: Request) -> Response {
    if is_api_path(req.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match assets.oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Answer for an API path hit with a verb it does not support.
pub async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
