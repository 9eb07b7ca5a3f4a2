pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::ServerConfig;
use store::TaskStore;

/// Shared application state passed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub store: Arc<TaskStore>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(TaskStore::new(config.snapshot_path.clone()));
        Self {
            config: Arc::new(config),
            store,
            started_at: std::time::Instant::now(),
        }
    }
}
