//! Integration tests for the `ships` repository and the PostgreSQL storage
//! adapter.
//!
//! These need a live PostgreSQL instance; run them with
//! `DATABASE_URL=... cargo test -p fleet-db -- --ignored`.

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use fleet_core::error::CoreError;
use fleet_core::ship::{NewShip, ShipType};
use fleet_core::storage::ShipStorage;
use fleet_db::repositories::ShipRepo;
use fleet_db::PgShipStorage;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_ship(name: &str, ship_type: ShipType) -> NewShip {
    NewShip {
        name: name.to_string(),
        planet: "Earth".to_string(),
        ship_type,
        prod_date: Utc.with_ymd_and_hms(3000, 5, 1, 0, 0, 0).unwrap(),
        is_used: false,
        speed: 0.4,
        crew_size: 25,
        rating: 1.6,
    }
}

// ---------------------------------------------------------------------------
// Test: repository CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_ship_repo_crud(pool: PgPool) {
    // Create
    let row = ShipRepo::create(&pool, &new_ship("Orion", ShipType::Transport))
        .await
        .unwrap();
    assert_eq!(row.name, "Orion");
    assert_eq!(row.ship_type, "TRANSPORT");

    // Find by id
    let found = ShipRepo::find_by_id(&pool, row.id)
        .await
        .unwrap()
        .expect("ship should exist");
    assert_eq!(found.id, row.id);

    // Delete
    assert!(ShipRepo::delete(&pool, row.id).await.unwrap());
    assert!(!ShipRepo::delete(&pool, row.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: check constraints reject invalid rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_check_constraints(pool: PgPool) {
    let mut ship = new_ship("Fast", ShipType::Military);
    ship.speed = 1.5;
    let result = ShipRepo::create(&pool, &ship).await;
    assert!(result.is_err(), "speed above 0.99 should violate the check");
}

// ---------------------------------------------------------------------------
// Test: storage adapter round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_storage_round_trip(pool: PgPool) {
    let storage = PgShipStorage::new(pool);

    let a = storage.insert(&new_ship("A", ShipType::Merchant)).await.unwrap();
    let b = storage.insert(&new_ship("B", ShipType::Transport)).await.unwrap();
    assert!(a.id < b.id);

    let all = storage.find_all().await.unwrap();
    assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![a.id, b.id]);

    let mut changed = a.clone();
    changed.planet = "Pluto".to_string();
    let updated = storage.update(&changed).await.unwrap();
    assert_eq!(updated.planet, "Pluto");
    assert_eq!(updated.ship_type, ShipType::Merchant);

    storage.delete(&b).await.unwrap();
    assert!(storage.find_by_id(b.id).await.unwrap().is_none());
    assert_matches!(storage.delete(&b).await, Err(CoreError::NotFound { .. }));

    storage.health_check().await.unwrap();
}
