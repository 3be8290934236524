//! Note handlers.
//!
//! Note content is rich text. It is run through [`sanitize_html`] on both
//! create and update, before storage sees it.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::parse_body;
use crate::api::AppState;
use crate::api::error::HandlerError;
use crate::api::sanitize::sanitize_html;
use crate::db::{Database, Note, NoteRepository};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    #[schema(example = "n1")]
    pub id: String,
    #[schema(example = "Meeting notes")]
    pub title: String,
    #[schema(example = "<p>Agenda</p>")]
    pub content: String,
    #[schema(example = json!(["work", "urgent"]))]
    pub tags: Vec<String>,
    pub category: Option<String>,
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub created_at: String,
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub updated_at: String,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            tags: n.tags,
            category: n.category,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteCreatedResponse {
    #[schema(example = "n1")]
    pub id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    /// Chosen by the client; must be unique.
    #[schema(example = "n1")]
    pub id: String,
    #[schema(example = "Meeting notes")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "<b>hi</b>")]
    pub content: String,
    /// Tag values may not contain commas.
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
    /// Defaults to the current time when absent.
    pub created_at: Option<String>,
    /// Defaults to `createdAt` when absent.
    pub updated_at: Option<String>,
}

/// Replacement fields for an existing note.
///
/// `id` comes from the path. Any `createdAt`/`updatedAt` in the body is
/// ignored: the creation time is fixed and the update time is stamped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    #[schema(example = "Meeting notes")]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All notes, most recently updated first", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn list_notes<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<NoteResponse>>, HandlerError> {
    let notes = state.db().notes().list().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteCreatedResponse),
        (status = 400, description = "Malformed body or invalid tags"),
        (status = 500, description = "Duplicate id or storage failure")
    )
)]
#[instrument(skip(state, body))]
pub async fn create_note<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> Result<(StatusCode, Json<NoteCreatedResponse>), HandlerError> {
    let req: CreateNoteRequest = parse_body(&body)?;

    let note = Note {
        id: req.id,
        title: req.title,
        content: sanitize_html(&req.content),
        tags: req.tags,
        category: req.category,
        // Empty strings tell the repository to stamp the current time
        created_at: req.created_at.unwrap_or_default(),
        updated_at: req.updated_at.unwrap_or_default(),
    };

    let id = state.db().notes().create(&note).await?;

    Ok((StatusCode::CREATED, Json(NoteCreatedResponse { id })))
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Update applied (a missing id is a no-op)"),
        (status = 400, description = "Malformed body or invalid tags"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state, body))]
pub async fn update_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, HandlerError> {
    let req: UpdateNoteRequest = parse_body(&body)?;

    let note = Note {
        id,
        title: req.title,
        content: sanitize_html(&req.content),
        tags: req.tags,
        category: req.category,
        created_at: String::new(),
        updated_at: String::new(),
    };

    state.db().notes().update(&note).await?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted (or already absent)"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn delete_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    state.db().notes().delete(&id).await?;
    Ok(StatusCode::OK)
}
