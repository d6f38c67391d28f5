use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use models::destination::{Destination, NewDestination};
use serde::Deserialize;
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{parse_id, ValidJson},
    routes::created,
    state::AppState,
};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TagQuery {
    /// Comma-separated tags; a destination matches if it carries any of them.
    pub tags: Option<String>,
}

impl TagQuery {
    fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[utoipa::path(
    get, path = "/api/destinations", tag = "destinations",
    params(TagQuery),
    responses((status = 200, description = "OK"))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<TagQuery>) -> Json<Vec<Destination>> {
    let tags = q.tag_list();
    if tags.is_empty() {
        Json(state.storage.get_destinations().await)
    } else {
        Json(state.storage.get_destinations_by_tags(&tags).await)
    }
}

#[utoipa::path(
    get, path = "/api/destinations/{id}", tag = "destinations",
    params(("id" = u64, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid destination ID"),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Destination>, ApiError> {
    let id = parse_id(&raw, "destination")?;
    state
        .storage
        .get_destination(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Destination"))
}

#[utoipa::path(
    get, path = "/api/destinations/region/{region}", tag = "destinations",
    params(("region" = String, Path, description = "Exact region name")),
    responses((status = 200, description = "OK"))
)]
pub async fn by_region(State(state): State<AppState>, Path(region): Path<String>) -> Json<Vec<Destination>> {
    Json(state.storage.get_destinations_by_region(&region).await)
}

#[utoipa::path(
    post, path = "/api/destinations", tag = "destinations",
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewDestination>,
) -> (StatusCode, Json<Destination>) {
    let destination = state.storage.create_destination(input).await;
    info!(destination_id = destination.id, "created destination");
    created("destination", destination)
}
