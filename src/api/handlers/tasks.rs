//! Task handlers.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{CreatedResponse, parse_body};
use crate::api::AppState;
use crate::api::error::HandlerError;
use crate::db::{Database, NewTask, Task, TaskRepository};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Write report")]
    pub title: String,
    pub completed: bool,
    #[schema(example = "work")]
    pub category: Option<String>,
    #[schema(example = "09:00")]
    pub start_time: Option<String>,
    #[schema(example = "10:00")]
    pub end_time: Option<String>,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            completed: t.completed,
            category: t.category,
            start_time: t.start_time,
            end_time: t.end_time,
        }
    }
}

/// New tasks always start incomplete; a `completed` field is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[schema(example = "Write report")]
    pub title: String,
    pub category: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            title: req.title,
            category: req.category,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks", body = Vec<TaskResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn list_tasks<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<TaskResponse>>, HandlerError> {
    let tasks = state.db().tasks().list().await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = CreatedResponse),
        (status = 400, description = "Malformed body or missing title"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state, body))]
pub async fn create_task<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), HandlerError> {
    let req: CreateTaskRequest = parse_body(&body)?;
    let id = state.db().tasks().create(&NewTask::from(req)).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
