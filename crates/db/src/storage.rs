//! PostgreSQL adapter for the core [`ShipStorage`] port.

use async_trait::async_trait;
use fleet_core::error::CoreError;
use fleet_core::ship::{NewShip, Ship};
use fleet_core::storage::ShipStorage;
use fleet_core::types::DbId;

use crate::repositories::ShipRepo;
use crate::DbPool;

/// [`ShipStorage`] backed by the `ships` table.
#[derive(Clone)]
pub struct PgShipStorage {
    pool: DbPool,
}

impl PgShipStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log the driver error and hand the core a sanitized one.
fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Ship storage query failed");
    CoreError::Internal(err.to_string())
}

#[async_trait]
impl ShipStorage for PgShipStorage {
    async fn find_all(&self) -> Result<Vec<Ship>, CoreError> {
        ShipRepo::list(&self.pool)
            .await
            .map_err(storage_error)?
            .into_iter()
            .map(Ship::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Ship>, CoreError> {
        ShipRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?
            .map(Ship::try_from)
            .transpose()
    }

    async fn insert(&self, ship: &NewShip) -> Result<Ship, CoreError> {
        let row = ShipRepo::create(&self.pool, ship)
            .await
            .map_err(storage_error)?;
        tracing::debug!(id = row.id, "Inserted ship row");
        Ship::try_from(row)
    }

    async fn update(&self, ship: &Ship) -> Result<Ship, CoreError> {
        ShipRepo::update(&self.pool, ship)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound {
                entity: "Ship",
                id: ship.id,
            })
            .and_then(Ship::try_from)
    }

    async fn delete(&self, ship: &Ship) -> Result<(), CoreError> {
        let deleted = ShipRepo::delete(&self.pool, ship.id)
            .await
            .map_err(storage_error)?;
        if deleted {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Ship",
                id: ship.id,
            })
        }
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }
}
