use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::preference::{NewPreference, Preference, PreferencePatch};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{parse_id, ValidJson},
    routes::created,
    state::AppState,
};

#[utoipa::path(
    get, path = "/api/preferences/{user_id}", tag = "preferences",
    params(("user_id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "Preferences not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Preference>, ApiError> {
    let user_id = parse_id(&raw, "user")?;
    state
        .storage
        .get_user_preferences(user_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Preferences"))
}

/// Upsert keyed by `userId`: an existing set is merged, not duplicated.
#[utoipa::path(
    post, path = "/api/preferences", tag = "preferences",
    responses((status = 201, description = "Saved"), (status = 400, description = "Validation Error"))
)]
pub async fn save(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewPreference>,
) -> (StatusCode, Json<Preference>) {
    let preference = state.storage.save_user_preferences(input).await;
    info!(user_id = preference.user_id, preference_id = preference.id, "saved preferences");
    created("preference", preference)
}

#[utoipa::path(
    patch, path = "/api/preferences/{user_id}", tag = "preferences",
    params(("user_id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Invalid user ID or body"),
        (status = 404, description = "Preferences not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    ValidJson(patch): ValidJson<PreferencePatch>,
) -> Result<Json<Preference>, ApiError> {
    let user_id = parse_id(&raw, "user")?;
    state
        .storage
        .update_user_preferences(user_id, patch)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Preferences"))
}
