use std::path::Path;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{metrics, openapi::ApiDoc, state::AppState};

pub mod bookings;
pub mod destinations;
pub mod events;
pub mod experiences;
pub mod hidden_gems;
pub mod newsletter;
pub mod preferences;
pub mod reviews;
pub mod users;
pub mod weather;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// 201 response for a freshly created record; also bumps the per-kind counter.
pub(crate) fn created<T: Serialize>(kind: &str, record: T) -> (StatusCode, Json<T>) {
    metrics::record_created(kind);
    (StatusCode::CREATED, Json(record))
}

/// All `/api/*` routes, still waiting for their state.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // users
        .route("/api/users", post(users::create))
        .route("/api/users/:id", get(users::get).patch(users::update))
        // destinations
        .route("/api/destinations", get(destinations::list).post(destinations::create))
        .route("/api/destinations/:id", get(destinations::get))
        .route("/api/destinations/region/:region", get(destinations::by_region))
        // experiences
        .route("/api/experiences", get(experiences::list).post(experiences::create))
        .route("/api/experiences/:id", get(experiences::get))
        .route("/api/experiences/category/:category", get(experiences::by_category))
        // reviews
        .route("/api/reviews", get(reviews::list).post(reviews::create))
        .route("/api/reviews/:id", get(reviews::get))
        .route("/api/reviews/destination/:id", get(reviews::by_destination))
        .route("/api/reviews/experience/:id", get(reviews::by_experience))
        .route("/api/reviews/user/:id", get(reviews::by_user))
        // hidden gems
        .route("/api/hidden-gems", get(hidden_gems::list).post(hidden_gems::create))
        .route("/api/hidden-gems/:id", get(hidden_gems::get))
        .route("/api/hidden-gems/region/:region", get(hidden_gems::by_region))
        // events
        .route("/api/events", get(events::list).post(events::create))
        .route("/api/events/:id", get(events::get))
        // bookings
        .route("/api/bookings", get(bookings::list).post(bookings::create))
        .route("/api/bookings/:id", get(bookings::get))
        .route("/api/bookings/:id/status", patch(bookings::update_status))
        .route("/api/bookings/user/:id", get(bookings::by_user))
        // newsletter
        .route("/api/newsletter", post(newsletter::subscribe))
        // preferences
        .route("/api/preferences", post(preferences::save))
        .route("/api/preferences/:user_id", get(preferences::get).patch(preferences::update))
        // weather mock
        .route("/api/weather/:city", get(weather::forecast))
}

/// Build the full application router: API, health, metrics, OpenAPI document
/// and, when `static_dir` is given, the pre-built frontend as fallback.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: Option<&Path>) -> Router {
    let mut router = api_routes()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
