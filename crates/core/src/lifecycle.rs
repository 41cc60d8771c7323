//! Create, read, update and delete for ships.
//!
//! Every mutation validates its input first and recomputes the rating from
//! the resulting state before anything reaches storage, so a rejected
//! request never leaves a partial write behind.

use std::sync::Arc;

use crate::error::CoreError;
use crate::rating::{compute_rating, refresh_rating};
use crate::ship::{NewShip, Ship, ShipDraft, ShipPatch};
use crate::storage::ShipStorage;
use crate::types::DbId;
use crate::validation::{validate_draft, validate_patch};

/// Ship lifecycle operations over the injected storage.
#[derive(Clone)]
pub struct LifecycleService {
    storage: Arc<dyn ShipStorage>,
}

impl LifecycleService {
    pub fn new(storage: Arc<dyn ShipStorage>) -> Self {
        Self { storage }
    }

    /// Validate `draft`, derive its rating and persist it.
    ///
    /// A missing draft is rejected as invalid input.
    pub async fn create(&self, draft: Option<ShipDraft>) -> Result<Ship, CoreError> {
        let draft =
            draft.ok_or_else(|| CoreError::Validation("Request body is empty".to_string()))?;
        let valid = validate_draft(draft)?;

        let new_ship = NewShip {
            rating: compute_rating(valid.speed, valid.is_used, valid.prod_date),
            name: valid.name,
            planet: valid.planet,
            ship_type: valid.ship_type,
            prod_date: valid.prod_date,
            is_used: valid.is_used,
            speed: valid.speed,
            crew_size: valid.crew_size,
        };
        let ship = self.storage.insert(&new_ship).await?;

        tracing::info!(ship_id = ship.id, name = %ship.name, rating = ship.rating, "Ship created");
        Ok(ship)
    }

    /// Fetch a ship by id.
    pub async fn read(&self, id: DbId) -> Result<Ship, CoreError> {
        if id <= 0 {
            return Err(CoreError::Validation(format!(
                "Ship id must be a positive integer, got {id}"
            )));
        }
        self.storage
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Ship", id })
    }

    /// Apply the present fields of `patch` and persist the result.
    ///
    /// The rating is recomputed even when no rating input changed.
    pub async fn update(&self, id: DbId, patch: ShipPatch) -> Result<Ship, CoreError> {
        let mut ship = self.read(id).await?;
        let valid = validate_patch(patch)?;

        valid.apply_to(&mut ship);
        refresh_rating(&mut ship);
        let ship = self.storage.update(&ship).await?;

        tracing::info!(ship_id = ship.id, rating = ship.rating, "Ship updated");
        Ok(ship)
    }

    /// Remove a ship.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let ship = self.read(id).await?;
        self.storage.delete(&ship).await?;

        tracing::info!(ship_id = id, "Ship deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::ship::ShipType;
    use crate::storage::MemoryShipStorage;

    fn millis(year: i32) -> i64 {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn draft() -> ShipDraft {
        ShipDraft {
            name: Some("Nostromo".into()),
            planet: Some("Thedus".into()),
            ship_type: Some("MERCHANT".into()),
            prod_date: Some(millis(3019)),
            is_used: None,
            speed: Some(0.5),
            crew_size: Some(7),
        }
    }

    fn service() -> (LifecycleService, Arc<MemoryShipStorage>) {
        let storage = Arc::new(MemoryShipStorage::new());
        (LifecycleService::new(storage.clone()), storage)
    }

    // -- create --------------------------------------------------------------

    #[tokio::test]
    async fn create_persists_with_rating_and_default_is_used() {
        let (svc, storage) = service();
        let ship = svc.create(Some(draft())).await.unwrap();

        assert_eq!(ship.id, 1);
        assert_eq!(ship.ship_type, ShipType::Merchant);
        assert!(!ship.is_used);
        assert_eq!(ship.rating, 40.0);
        assert_eq!(storage.find_by_id(1).await.unwrap(), Some(ship));
    }

    #[tokio::test]
    async fn create_used_ship_halves_rating() {
        let (svc, _) = service();
        let mut d = draft();
        d.is_used = Some(true);
        let ship = svc.create(Some(d)).await.unwrap();
        assert_eq!(ship.rating, 20.0);
    }

    #[tokio::test]
    async fn create_without_body_is_invalid_input() {
        let (svc, storage) = service();
        assert_matches!(svc.create(None).await, Err(CoreError::Validation(_)));
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn create_with_invalid_field_persists_nothing() {
        let (svc, storage) = service();
        let mut d = draft();
        d.crew_size = Some(10_000);
        assert_matches!(svc.create(Some(d)).await, Err(CoreError::Validation(_)));
        assert!(storage.is_empty().await);
    }

    // -- read ----------------------------------------------------------------

    #[tokio::test]
    async fn read_rejects_non_positive_ids() {
        let (svc, _) = service();
        assert_matches!(svc.read(0).await, Err(CoreError::Validation(_)));
        assert_matches!(svc.read(-1).await, Err(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn read_missing_is_not_found() {
        let (svc, _) = service();
        assert_matches!(
            svc.read(99).await,
            Err(CoreError::NotFound { entity: "Ship", id: 99 })
        );
    }

    // -- update --------------------------------------------------------------

    #[tokio::test]
    async fn empty_patch_keeps_fields_and_rating() {
        let (svc, _) = service();
        let created = svc.create(Some(draft())).await.unwrap();
        let updated = svc.update(created.id, ShipPatch::default()).await.unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn update_merges_present_fields_and_recomputes_rating() {
        let (svc, storage) = service();
        let created = svc.create(Some(draft())).await.unwrap();

        let patch = ShipPatch {
            name: Some("Sulaco".into()),
            is_used: Some(true),
            ..Default::default()
        };
        let updated = svc.update(created.id, patch).await.unwrap();

        assert_eq!(updated.name, "Sulaco");
        assert_eq!(updated.planet, created.planet);
        assert!(updated.is_used);
        assert_eq!(updated.rating, 20.0);
        assert_eq!(storage.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn invalid_patch_leaves_stored_ship_untouched() {
        let (svc, storage) = service();
        let created = svc.create(Some(draft())).await.unwrap();

        let patch = ShipPatch {
            name: Some("Renamed".into()),
            speed: Some(1.2),
            ..Default::default()
        };
        assert_matches!(
            svc.update(created.id, patch).await,
            Err(CoreError::Validation(_))
        );
        assert_eq!(storage.find_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn update_unknown_ship_type_is_rejected() {
        let (svc, _) = service();
        let created = svc.create(Some(draft())).await.unwrap();
        let patch = ShipPatch {
            ship_type: Some("BARGE".into()),
            ..Default::default()
        };
        assert_matches!(
            svc.update(created.id, patch).await,
            Err(CoreError::Validation(_))
        );
    }

    #[tokio::test]
    async fn update_missing_ship_is_not_found() {
        let (svc, _) = service();
        assert_matches!(
            svc.update(5, ShipPatch::default()).await,
            Err(CoreError::NotFound { .. })
        );
    }

    // -- delete --------------------------------------------------------------

    #[tokio::test]
    async fn delete_removes_ship() {
        let (svc, storage) = service();
        let created = svc.create(Some(draft())).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(storage.is_empty().await);
        assert_matches!(svc.read(created.id).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_propagates_read_errors() {
        let (svc, _) = service();
        assert_matches!(svc.delete(0).await, Err(CoreError::Validation(_)));
        assert_matches!(svc.delete(3).await, Err(CoreError::NotFound { .. }));
    }
}
