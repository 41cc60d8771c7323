use std::sync::Arc;

use fleet_core::lifecycle::LifecycleService;
use fleet_core::query::QueryEngine;
use fleet_core::storage::ShipStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Ship storage, shared by both services below.
    pub storage: Arc<dyn ShipStorage>,
    /// List and count queries.
    pub queries: QueryEngine,
    /// Create, read, update and delete.
    pub lifecycle: LifecycleService,
}

impl AppState {
    /// Wire both services to the same storage backend.
    pub fn new(config: ServerConfig, storage: Arc<dyn ShipStorage>) -> Self {
        Self {
            config: Arc::new(config),
            queries: QueryEngine::new(Arc::clone(&storage)),
            lifecycle: LifecycleService::new(Arc::clone(&storage)),
            storage,
        }
    }
}
