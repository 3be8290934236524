//! API route configuration.

use std::path::Path;

use axum::Router;
use axum::extract::Request;
use axum::routing::{delete, get, post, put};
use tower_http::services::ServeDir;
use utoipa::OpenApi;

use super::handlers::{
    self, CalendarEventResponse, CreateCalendarEventRequest, CreateNoteRequest,
    CreateTaskRequest, CreatedResponse, NoteCreatedResponse, NoteResponse, TaskResponse,
    UpdateNoteRequest,
};
use super::state::AppState;
use super::static_assets::{api_not_found, serve_static};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NEO FOCUS API",
        version = "0.1.0",
        description = "Local persistence API for tasks, calendar events and notes",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::list_tasks,
        handlers::create_task,
        handlers::list_calendar_events,
        handlers::create_calendar_event,
        handlers::list_notes,
        handlers::create_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(
        schemas(
            TaskResponse,
            CreateTaskRequest,
            CalendarEventResponse,
            CreateCalendarEventRequest,
            NoteResponse,
            CreateNoteRequest,
            UpdateNoteRequest,
            CreatedResponse,
            NoteCreatedResponse,
        )
    ),
    tags(
        (name = "tasks", description = "Daily schedule tasks"),
        (name = "calendar", description = "Calendar events"),
        (name = "notes", description = "Rich-text notes")
    )
)]
pub struct ApiDoc;

/// Create the router: the eight API routes, then static files for the rest.
///
/// An API path hit with an unregistered verb answers 404, as does any
/// unknown path under `/api/`.
pub fn create_router<D: Database>(state: AppState<D>, assets_dir: &Path) -> Router {
    let api_routes = routes!(D => {
        get "/api/tasks" => handlers::list_tasks,
        post "/api/tasks" => handlers::create_task,
        get "/api/calendar-events" => handlers::list_calendar_events,
        post "/api/calendar-events" => handlers::create_calendar_event,
        get "/api/notes" => handlers::list_notes,
        post "/api/notes" => handlers::create_note,
        put "/api/notes/{id}" => handlers::update_note,
        delete "/api/notes/{id}" => handlers::delete_note,
    });

    let assets = ServeDir::new(assets_dir);

    api_routes
        .method_not_allowed_fallback(api_not_found)
        .fallback(move |req: Request| serve_static(assets.clone(), req))
        .with_state(state)
}
