use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::hidden_gem::{HiddenGem, NewHiddenGem};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{parse_id, ValidJson},
    routes::created,
    state::AppState,
};

#[utoipa::path(get, path = "/api/hidden-gems", tag = "hidden-gems", responses((status = 200, description = "OK")))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<HiddenGem>> {
    Json(state.storage.get_hidden_gems().await)
}

#[utoipa::path(
    get, path = "/api/hidden-gems/{id}", tag = "hidden-gems",
    params(("id" = u64, Path, description = "Hidden gem ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid hidden gem ID"),
        (status = 404, description = "Hidden gem not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<HiddenGem>, ApiError> {
    let id = parse_id(&raw, "hidden gem")?;
    state
        .storage
        .get_hidden_gem(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Hidden gem"))
}

#[utoipa::path(
    get, path = "/api/hidden-gems/region/{region}", tag = "hidden-gems",
    params(("region" = String, Path, description = "Exact region name")),
    responses((status = 200, description = "OK"))
)]
pub async fn by_region(State(state): State<AppState>, Path(region): Path<String>) -> Json<Vec<HiddenGem>> {
    Json(state.storage.get_hidden_gems_by_region(&region).await)
}

#[utoipa::path(
    post, path = "/api/hidden-gems", tag = "hidden-gems",
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewHiddenGem>,
) -> (StatusCode, Json<HiddenGem>) {
    let gem = state.storage.create_hidden_gem(input).await;
    info!(hidden_gem_id = gem.id, "created hidden gem");
    created("hidden_gem", gem)
}
