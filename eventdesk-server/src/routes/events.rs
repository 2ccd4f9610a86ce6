//! Event CRUD endpoints

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use eventdesk_core::{Event, EventInput};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// Response body for a successful delete
#[derive(Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /api/events - List all events
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.store().list().await?))
}

/// GET /api/events/:id - Get a single event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(state.store().get(&id).await?))
}

/// POST /api/events - Create an event
async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<EventInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let Json(input) = body?;
    let fields = input.validate()?;

    let event = state.store().create(fields).await?;
    info!(id = %event.id, title = %event.fields.title, "Created event");

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/:id - Replace an event's fields
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EventInput>, JsonRejection>,
) -> Result<Json<Event>, AppError> {
    let Json(input) = body?;
    let fields = input.validate()?;

    let event = state.store().update(&id, fields).await?;
    info!(id = %event.id, "Updated event");

    Ok(Json(event))
}

/// DELETE /api/events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.store().delete(&id).await?;
    info!(id = %id, "Deleted event");

    Ok(Json(DeleteResponse {
        message: "Event deleted successfully".to_string(),
    }))
}
