//! Repository for the `ships` table.

use fleet_core::ship::{NewShip, Ship};
use fleet_core::types::DbId;
use sqlx::PgPool;

use crate::models::ship::ShipRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, planet, ship_type, prod_date, is_used, speed, crew_size, rating";

/// Provides CRUD operations for ships.
pub struct ShipRepo;

impl ShipRepo {
    /// Insert a new ship, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewShip) -> Result<ShipRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO ships \
                (name, planet, ship_type, prod_date, is_used, speed, crew_size, rating) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShipRow>(&query)
            .bind(&input.name)
            .bind(&input.planet)
            .bind(input.ship_type.as_str())
            .bind(input.prod_date)
            .bind(input.is_used)
            .bind(input.speed)
            .bind(input.crew_size)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a ship by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShipRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ships WHERE id = $1");
        sqlx::query_as::<_, ShipRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every ship in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShipRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ships ORDER BY id");
        sqlx::query_as::<_, ShipRow>(&query).fetch_all(pool).await
    }

    /// Overwrite all mutable columns of a ship.
    ///
    /// Returns `None` if no row with `ship.id` exists.
    pub async fn update(pool: &PgPool, ship: &Ship) -> Result<Option<ShipRow>, sqlx::Error> {
        let query = format!(
            "UPDATE ships SET \
                name = $2, \
                planet = $3, \
                ship_type = $4, \
                prod_date = $5, \
                is_used = $6, \
                speed = $7, \
                crew_size = $8, \
                rating = $9, \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShipRow>(&query)
            .bind(ship.id)
            .bind(&ship.name)
            .bind(&ship.planet)
            .bind(ship.ship_type.as_str())
            .bind(ship.prod_date)
            .bind(ship.is_used)
            .bind(ship.speed)
            .bind(ship.crew_size)
            .bind(ship.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a ship. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
