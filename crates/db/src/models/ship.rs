//! Row mapping for the `ships` table.
//!
//! `ship_type` is stored as TEXT, so rows are read into [`ShipRow`] and
//! converted into the domain [`Ship`].

use fleet_core::error::CoreError;
use fleet_core::ship::{Ship, ShipType};
use fleet_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `ships` table.
#[derive(Debug, Clone, FromRow)]
pub struct ShipRow {
    pub id: DbId,
    pub name: String,
    pub planet: String,
    pub ship_type: String,
    pub prod_date: Timestamp,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl TryFrom<ShipRow> for Ship {
    type Error = CoreError;

    fn try_from(row: ShipRow) -> Result<Self, Self::Error> {
        let ship_type = ShipType::from_str_value(&row.ship_type).map_err(|_| {
            CoreError::Internal(format!(
                "ship {} has unknown ship_type '{}'",
                row.id, row.ship_type
            ))
        })?;

        Ok(Ship {
            id: row.id,
            name: row.name,
            planet: row.planet,
            ship_type,
            prod_date: row.prod_date,
            is_used: row.is_used,
            speed: row.speed,
            crew_size: row.crew_size,
            rating: row.rating,
        })
    }
}
