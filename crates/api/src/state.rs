use std::sync::Arc;

use reelrate_db::DbPool;

use crate::config::ServerConfig;

/// Everything a handler needs, handed out through `State<AppState>`.
///
/// Cloning copies a pool handle and an `Arc`; there is no other
/// process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    /// Read by the catalog handlers for page-size limits.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
