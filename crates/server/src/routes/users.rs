use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::user::{NewUser, User, UserPatch};
use rand::rngs::OsRng;
use tracing::{error, info};

use crate::{
    errors::ApiError,
    extract::{parse_id, ValidJson},
    routes::created,
    state::AppState,
};

fn hash_password(plain: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(err = %e, "password hashing failed");
            ApiError::internal()
        })
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Username or email already exists")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    // 先做重复检查，便于返回具体冲突字段
    if state.storage.get_user_by_username(&input.username).await.is_some() {
        return Err(ApiError::conflict("Username already exists"));
    }
    if state.storage.get_user_by_email(&input.email).await.is_some() {
        return Err(ApiError::conflict("Email already exists"));
    }

    let password = hash_password(&input.password)?;
    let user = state.storage.create_user(NewUser { password, ..input }).await?;
    info!(user_id = user.id, "registered user");
    Ok(created("user", user))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw, "user")?;
    state
        .storage
        .get_user(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User"))
}

#[utoipa::path(
    patch, path = "/api/users/{id}", tag = "users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username or email already exists")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    ValidJson(mut patch): ValidJson<UserPatch>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw, "user")?;
    if let Some(plain) = patch.password.take() {
        patch.password = Some(hash_password(&plain)?);
    }
    match state.storage.update_user(id, patch).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::not_found("User")),
    }
}
