//! Environment/runtime helpers
//!
//! Sanity checks for directories the server expects at startup.

use std::path::Path;

use tracing::warn;

/// Returns whether `frontend_dir` is a directory; a missing one only warns,
/// the API keeps working without static assets.
pub async fn ensure_env(frontend_dir: &Path) -> bool {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => true,
        _ => {
            warn!(frontend_dir = %frontend_dir.display(), "frontend assets directory not found; static assets will 404");
            false
        }
    }
}
