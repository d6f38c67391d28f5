use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::booking::{Booking, BookingStatusUpdate, NewBooking};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{parse_id, ValidJson},
    routes::created,
    state::AppState,
};

#[utoipa::path(get, path = "/api/bookings", tag = "bookings", responses((status = 200, description = "OK")))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Booking>> {
    Json(state.storage.get_bookings().await)
}

#[utoipa::path(
    get, path = "/api/bookings/{id}", tag = "bookings",
    params(("id" = u64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid booking ID"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Booking>, ApiError> {
    let id = parse_id(&raw, "booking")?;
    state
        .storage
        .get_booking(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Booking"))
}

#[utoipa::path(
    get, path = "/api/bookings/user/{id}", tag = "bookings",
    params(("id" = u64, Path, description = "User ID")),
    responses((status = 200, description = "OK"), (status = 400, description = "Invalid user ID"))
)]
pub async fn by_user(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Vec<Booking>>, ApiError> {
    let id = parse_id(&raw, "user")?;
    Ok(Json(state.storage.get_bookings_by_user(id).await))
}

#[utoipa::path(
    post, path = "/api/bookings", tag = "bookings",
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(State(state): State<AppState>, ValidJson(input): ValidJson<NewBooking>) -> (StatusCode, Json<Booking>) {
    let booking = state.storage.create_booking(input).await;
    info!(booking_id = booking.id, user_id = booking.user_id, "created booking");
    created("booking", booking)
}

#[utoipa::path(
    patch, path = "/api/bookings/{id}/status", tag = "bookings",
    params(("id" = u64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Invalid booking ID or missing status"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    ValidJson(body): ValidJson<BookingStatusUpdate>,
) -> Result<Json<Booking>, ApiError> {
    let id = parse_id(&raw, "booking")?;
    // validate() already rejected a missing or blank status
    let status = body.status.unwrap_or_default();
    state
        .storage
        .update_booking_status(id, status)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Booking"))
}
