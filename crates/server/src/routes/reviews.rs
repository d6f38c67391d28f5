use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::review::{NewReview, Review};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{parse_id, ValidJson},
    routes::created,
    state::AppState,
};

#[utoipa::path(get, path = "/api/reviews", tag = "reviews", responses((status = 200, description = "OK")))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.storage.get_reviews().await)
}

#[utoipa::path(
    get, path = "/api/reviews/{id}", tag = "reviews",
    params(("id" = u64, Path, description = "Review ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid review ID"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Review>, ApiError> {
    let id = parse_id(&raw, "review")?;
    state
        .storage
        .get_review(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Review"))
}

#[utoipa::path(
    get, path = "/api/reviews/destination/{id}", tag = "reviews",
    params(("id" = u64, Path, description = "Destination ID")),
    responses((status = 200, description = "OK"), (status = 400, description = "Invalid destination ID"))
)]
pub async fn by_destination(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let id = parse_id(&raw, "destination")?;
    Ok(Json(state.storage.get_reviews_by_destination(id).await))
}

#[utoipa::path(
    get, path = "/api/reviews/experience/{id}", tag = "reviews",
    params(("id" = u64, Path, description = "Experience ID")),
    responses((status = 200, description = "OK"), (status = 400, description = "Invalid experience ID"))
)]
pub async fn by_experience(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let id = parse_id(&raw, "experience")?;
    Ok(Json(state.storage.get_reviews_by_experience(id).await))
}

#[utoipa::path(
    get, path = "/api/reviews/user/{id}", tag = "reviews",
    params(("id" = u64, Path, description = "User ID")),
    responses((status = 200, description = "OK"), (status = 400, description = "Invalid user ID"))
)]
pub async fn by_user(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Vec<Review>>, ApiError> {
    let id = parse_id(&raw, "user")?;
    Ok(Json(state.storage.get_reviews_by_user(id).await))
}

#[utoipa::path(
    post, path = "/api/reviews", tag = "reviews",
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(State(state): State<AppState>, ValidJson(input): ValidJson<NewReview>) -> (StatusCode, Json<Review>) {
    let review = state.storage.create_review(input).await;
    info!(review_id = review.id, user_id = review.user_id, "created review");
    created("review", review)
}
