//! Calendar event handlers.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{CreatedResponse, parse_body};
use crate::api::AppState;
use crate::api::error::HandlerError;
use crate::db::{CalendarEvent, CalendarEventRepository, Database, NewCalendarEvent};

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarEventResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Dentist")]
    pub title: String,
    #[schema(example = "2024-05-14")]
    pub date: String,
    #[schema(example = "14:30")]
    pub time: Option<String>,
    #[schema(example = "health")]
    pub category: Option<String>,
    /// Recurrence rule, returned verbatim.
    #[schema(example = "FREQ=YEARLY")]
    pub recurring: Option<String>,
}

impl From<CalendarEvent> for CalendarEventResponse {
    fn from(e: CalendarEvent) -> Self {
        Self {
            id: e.id,
            title: e.title,
            date: e.date,
            time: e.time,
            category: e.category,
            recurring: e.recurring,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCalendarEventRequest {
    #[schema(example = "Dentist")]
    pub title: String,
    #[schema(example = "2024-05-14")]
    pub date: String,
    pub time: Option<String>,
    pub category: Option<String>,
    pub recurring: Option<String>,
}

impl From<CreateCalendarEventRequest> for NewCalendarEvent {
    fn from(req: CreateCalendarEventRequest) -> Self {
        Self {
            title: req.title,
            date: req.date,
            time: req.time,
            category: req.category,
            recurring: req.recurring,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/calendar-events",
    tag = "calendar",
    responses(
        (status = 200, description = "All calendar events", body = Vec<CalendarEventResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn list_calendar_events<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<CalendarEventResponse>>, HandlerError> {
    let events = state.db().calendar_events().list().await?;
    Ok(Json(
        events
            .into_iter()
            .map(CalendarEventResponse::from)
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/calendar-events",
    tag = "calendar",
    request_body = CreateCalendarEventRequest,
    responses(
        (status = 201, description = "Event created", body = CreatedResponse),
        (status = 400, description = "Malformed body, missing title or date"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state, body))]
pub async fn create_calendar_event<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), HandlerError> {
    let req: CreateCalendarEventRequest = parse_body(&body)?;
    let id = state
        .db()
        .calendar_events()
        .create(&NewCalendarEvent::from(req))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
