use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::event::{Event, NewEvent};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{parse_id, ValidJson},
    routes::created,
    state::AppState,
};

#[utoipa::path(get, path = "/api/events", tag = "events", responses((status = 200, description = "OK")))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.storage.get_events().await)
}

#[utoipa::path(
    get, path = "/api/events/{id}", tag = "events",
    params(("id" = u64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid event ID"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Event>, ApiError> {
    let id = parse_id(&raw, "event")?;
    state
        .storage
        .get_event(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Event"))
}

#[utoipa::path(
    post, path = "/api/events", tag = "events",
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(State(state): State<AppState>, ValidJson(input): ValidJson<NewEvent>) -> (StatusCode, Json<Event>) {
    let event = state.storage.create_event(input).await;
    info!(event_id = event.id, "created event");
    created("event", event)
}
