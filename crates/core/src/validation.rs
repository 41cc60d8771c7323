//! Field-level validation for ship drafts and patches.
//!
//! Length and range rules are declared on the DTOs with `validator`; the
//! ship-type lookup and the production-date rule are checked here. Both
//! entry points return typed values so callers never touch raw input
//! after validation.

use chrono::{DateTime, Datelike, Utc};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::ship::{Ship, ShipDraft, ShipPatch, ShipType};
use crate::types::Timestamp;

/// Earliest accepted production year.
pub const MIN_PROD_YEAR: i32 = 2800;

/// Latest accepted production year.
pub const MAX_PROD_YEAR: i32 = 3019;

/// A draft that passed every rule. `is_used` is already defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: Timestamp,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
}

/// A patch whose present fields all passed their rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidPatch {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub prod_date: Option<Timestamp>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

impl ValidPatch {
    /// Overwrite the fields present in the patch. Does not touch `rating`.
    pub fn apply_to(self, ship: &mut Ship) {
        if let Some(name) = self.name {
            ship.name = name;
        }
        if let Some(planet) = self.planet {
            ship.planet = planet;
        }
        if let Some(ship_type) = self.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(prod_date) = self.prod_date {
            ship.prod_date = prod_date;
        }
        if let Some(is_used) = self.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = self.speed {
            ship.speed = speed;
        }
        if let Some(crew_size) = self.crew_size {
            ship.crew_size = crew_size;
        }
    }
}

/// Validate a full create request.
pub fn validate_draft(draft: ShipDraft) -> Result<ValidDraft, CoreError> {
    draft.validate().map_err(violations)?;

    // `required` guarantees presence past this point.
    let missing = |field: &str| CoreError::Validation(format!("{field} is required"));

    let ship_type = draft.ship_type.as_deref().ok_or_else(|| missing("shipType"))?;
    let ship_type = parse_ship_type(ship_type)?;
    let prod_date = parse_prod_date(draft.prod_date.ok_or_else(|| missing("prodDate"))?)?;

    Ok(ValidDraft {
        ship_type,
        prod_date,
        name: draft.name.ok_or_else(|| missing("name"))?,
        planet: draft.planet.ok_or_else(|| missing("planet"))?,
        is_used: draft.is_used.unwrap_or(false),
        speed: draft.speed.ok_or_else(|| missing("speed"))?,
        crew_size: draft.crew_size.ok_or_else(|| missing("crewSize"))?,
    })
}

/// Validate the present fields of an update request.
pub fn validate_patch(patch: ShipPatch) -> Result<ValidPatch, CoreError> {
    patch.validate().map_err(violations)?;

    Ok(ValidPatch {
        ship_type: patch.ship_type.as_deref().map(parse_ship_type).transpose()?,
        prod_date: patch.prod_date.map(parse_prod_date).transpose()?,
        name: patch.name,
        planet: patch.planet,
        is_used: patch.is_used,
        speed: patch.speed,
        crew_size: patch.crew_size,
    })
}

/// Parse a ship type supplied by the caller.
pub fn parse_ship_type(raw: &str) -> Result<ShipType, CoreError> {
    ShipType::from_str_value(raw)
}

/// Convert an epoch-millisecond production date and check its year.
pub fn parse_prod_date(millis: i64) -> Result<Timestamp, CoreError> {
    if millis < 0 {
        return Err(CoreError::Validation(format!(
            "prodDate must not be negative, got {millis}"
        )));
    }
    let date = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
        CoreError::Validation(format!("prodDate {millis} is out of range"))
    })?;
    validate_prod_year(date.year())?;
    Ok(date)
}

/// Check that a production year lies in `[MIN_PROD_YEAR, MAX_PROD_YEAR]`.
pub fn validate_prod_year(year: i32) -> Result<(), CoreError> {
    if !(MIN_PROD_YEAR..=MAX_PROD_YEAR).contains(&year) {
        return Err(CoreError::Validation(format!(
            "prodDate year must be between {MIN_PROD_YEAR} and {MAX_PROD_YEAR}, got {year}"
        )));
    }
    Ok(())
}

fn violations(errors: ValidationErrors) -> CoreError {
    CoreError::Validation(errors.to_string())
}
