use axum::{extract::State, http::StatusCode, Json};
use models::newsletter::{NewNewsletter, Newsletter};

use crate::{extract::ValidJson, routes::created, state::AppState};

/// Subscribing an address that is already on the list returns the stored record.
#[utoipa::path(
    post, path = "/api/newsletter", tag = "newsletter",
    responses((status = 201, description = "Subscribed"), (status = 400, description = "Validation Error"))
)]
pub async fn subscribe(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewNewsletter>,
) -> (StatusCode, Json<Newsletter>) {
    let subscription = state.storage.subscribe_to_newsletter(input).await;
    created("newsletter", subscription)
}
