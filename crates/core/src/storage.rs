//! Storage port for ships and an in-memory adapter.
//!
//! The query and lifecycle services only see [`ShipStorage`]; the
//! PostgreSQL adapter lives in `fleet-db`. [`MemoryShipStorage`] backs the
//! test suites and the server when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::ship::{NewShip, Ship};
use crate::types::DbId;

/// Persistence operations the core depends on.
#[async_trait]
pub trait ShipStorage: Send + Sync {
    /// Every stored ship, in ascending id order.
    async fn find_all(&self) -> Result<Vec<Ship>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Ship>, CoreError>;

    /// Persist a new ship and return it with its assigned id.
    async fn insert(&self, ship: &NewShip) -> Result<Ship, CoreError>;

    /// Overwrite every mutable column of an existing ship.
    async fn update(&self, ship: &Ship) -> Result<Ship, CoreError>;

    async fn delete(&self, ship: &Ship) -> Result<(), CoreError>;

    /// Cheap reachability check used by the health endpoint.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory adapter
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct MemoryState {
    ships: BTreeMap<DbId, Ship>,
    last_id: DbId,
}

/// Process-local storage. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryShipStorage {
    state: RwLock<MemoryState>,
}

impl MemoryShipStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ships.
    pub async fn len(&self) -> usize {
        self.state.read().await.ships.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ShipStorage for MemoryShipStorage {
    async fn find_all(&self) -> Result<Vec<Ship>, CoreError> {
        Ok(self.state.read().await.ships.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Ship>, CoreError> {
        Ok(self.state.read().await.ships.get(&id).cloned())
    }

    async fn insert(&self, ship: &NewShip) -> Result<Ship, CoreError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let stored = ship.clone().into_ship(state.last_id);
        state.ships.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, ship: &Ship) -> Result<Ship, CoreError> {
        let mut state = self.state.write().await;
        match state.ships.get_mut(&ship.id) {
            Some(slot) => {
                *slot = ship.clone();
                Ok(ship.clone())
            }
            None => Err(CoreError::NotFound {
                entity: "Ship",
                id: ship.id,
            }),
        }
    }

    async fn delete(&self, ship: &Ship) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        state
            .ships
            .remove(&ship.id)
            .map(|_| ())
            .ok_or(CoreError::NotFound {
                entity: "Ship",
                id: ship.id,
            })
    }
}
