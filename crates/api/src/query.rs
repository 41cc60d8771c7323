//! Query parameter types for the ship endpoints.

use fleet_core::filter::ShipCriteria;
use fleet_core::query::PageRequest;
use serde::Deserialize;

/// Query string accepted by `GET /rest/ships` and `GET /rest/ships/count`.
///
/// The count endpoint ignores `order`, `pageNumber` and `pageSize`. Kept as
/// one flat struct because `serde(flatten)` breaks numeric parsing of
/// urlencoded values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipQueryParams {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<String>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    /// Sort key, e.g. `speed` or the legacy `SPEED`.
    pub order: Option<String>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl ShipQueryParams {
    /// Filter criteria carried by this query string.
    pub fn criteria(&self) -> ShipCriteria {
        ShipCriteria {
            name: self.name.clone(),
            planet: self.planet.clone(),
            ship_type: self.ship_type.clone(),
            after: self.after,
            before: self.before,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }
}
