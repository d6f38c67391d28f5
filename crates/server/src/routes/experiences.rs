use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::experience::{Experience, NewExperience};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{parse_id, ValidJson},
    routes::created,
    state::AppState,
};

#[utoipa::path(get, path = "/api/experiences", tag = "experiences", responses((status = 200, description = "OK")))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.storage.get_experiences().await)
}

#[utoipa::path(
    get, path = "/api/experiences/{id}", tag = "experiences",
    params(("id" = u64, Path, description = "Experience ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid experience ID"),
        (status = 404, description = "Experience not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Experience>, ApiError> {
    let id = parse_id(&raw, "experience")?;
    state
        .storage
        .get_experience(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Experience"))
}

#[utoipa::path(
    get, path = "/api/experiences/category/{category}", tag = "experiences",
    params(("category" = String, Path, description = "Exact category name")),
    responses((status = 200, description = "OK"))
)]
pub async fn by_category(State(state): State<AppState>, Path(category): Path<String>) -> Json<Vec<Experience>> {
    Json(state.storage.get_experiences_by_category(&category).await)
}

#[utoipa::path(
    post, path = "/api/experiences", tag = "experiences",
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewExperience>,
) -> (StatusCode, Json<Experience>) {
    let experience = state.storage.create_experience(input).await;
    info!(experience_id = experience.id, "created experience");
    created("experience", experience)
}
