use std::sync::Arc;

use service::Storage;

/// Shared handler state. The store is built once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}
