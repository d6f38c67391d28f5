use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::{MemStorage, Storage};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn resolve_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|_| StartupError::InvalidConfig(format!("cannot parse bind address {raw}")))
}

/// Static dir to serve, if configured and present on disk.
async fn resolve_static_dir(cfg: &AppConfig) -> Option<PathBuf> {
    let dir = cfg.frontend.static_dir.clone()?;
    common::env::ensure_env(&dir).await.then_some(dir)
}

/// Seeded store + router, without binding anything.
pub async fn build_app(cfg: &AppConfig) -> Router {
    let storage: Arc<dyn Storage> = Arc::new(MemStorage::seeded());
    let static_dir = resolve_static_dir(cfg).await;
    routes::build_router(AppState::new(storage), build_cors(), static_dir.as_deref())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: build the app and serve it until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let addr = resolve_bind_addr(&cfg)?;
    let app = build_app(&cfg).await;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, "tourism api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
