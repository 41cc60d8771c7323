//! Multi-criteria ship filtering.
//!
//! [`ShipCriteria`] holds the optional parameters as received from the
//! request layer. [`ShipFilter::compile`] turns them into a typed predicate
//! once per query; the predicate is the conjunction of every supplied
//! criterion, and absent criteria impose no constraint.

use crate::error::CoreError;
use crate::ship::{Ship, ShipType};

/// Raw filter parameters. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipCriteria {
    /// Case-insensitive substring of the ship name.
    pub name: Option<String>,
    /// Case-insensitive substring of the planet.
    pub planet: Option<String>,
    /// Exact ship type; must name a known type.
    pub ship_type: Option<String>,
    /// Inclusive lower bound on `prod_date`, epoch milliseconds.
    pub after: Option<i64>,
    /// Inclusive upper bound on `prod_date`, epoch milliseconds.
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    /// Bounds on the stored rating.
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

/// Compiled form of [`ShipCriteria`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    name: Option<String>,
    planet: Option<String>,
    ship_type: Option<ShipType>,
    after: Option<i64>,
    before: Option<i64>,
    is_used: Option<bool>,
    min_speed: Option<f64>,
    max_speed: Option<f64>,
    min_crew_size: Option<i32>,
    max_crew_size: Option<i32>,
    min_rating: Option<f64>,
    max_rating: Option<f64>,
}

impl ShipFilter {
    /// Build a predicate from raw criteria.
    ///
    /// Fails with `CoreError::Validation` when `ship_type` does not name a
    /// known type.
    pub fn compile(criteria: &ShipCriteria) -> Result<Self, CoreError> {
        let ship_type = criteria
            .ship_type
            .as_deref()
            .map(ShipType::from_str_value)
            .transpose()?;

        Ok(Self {
            name: criteria.name.as_deref().map(str::to_lowercase),
            planet: criteria.planet.as_deref().map(str::to_lowercase),
            ship_type,
            after: criteria.after,
            before: criteria.before,
            is_used: criteria.is_used,
            min_speed: criteria.min_speed,
            max_speed: criteria.max_speed,
            min_crew_size: criteria.min_crew_size,
            max_crew_size: criteria.max_crew_size,
            min_rating: criteria.min_rating,
            max_rating: criteria.max_rating,
        })
    }

    /// Whether `ship` satisfies every active criterion.
    pub fn matches(&self, ship: &Ship) -> bool {
        let prod_millis = ship.prod_date.timestamp_millis();

        contains_folded(&ship.name, self.name.as_deref())
            && contains_folded(&ship.planet, self.planet.as_deref())
            && self.ship_type.map_or(true, |t| ship.ship_type == t)
            && self.after.map_or(true, |after| prod_millis >= after)
            && self.before.map_or(true, |before| prod_millis <= before)
            && self.is_used.map_or(true, |used| ship.is_used == used)
            && self.min_speed.map_or(true, |min| ship.speed >= min)
            && self.max_speed.map_or(true, |max| ship.speed <= max)
            && self.min_crew_size.map_or(true, |min| ship.crew_size >= min)
            && self.max_crew_size.map_or(true, |max| ship.crew_size <= max)
            && self.min_rating.map_or(true, |min| ship.rating >= min)
            && self.max_rating.map_or(true, |max| ship.rating <= max)
    }
}

/// `needle` must already be lower-cased.
fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |n| haystack.to_lowercase().contains(n))
}
