//! Ship entity model, ship types, and the create/update DTOs.
//!
//! `Ship` is the persisted shape. `ShipDraft` and `ShipPatch` are the
//! weakly-typed inputs the request layer hands over; they are turned into
//! typed values by [`crate::validation`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Ship type
// ---------------------------------------------------------------------------

/// Closed set of ship classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    /// All ship types, in declaration order.
    pub const ALL: [ShipType; 3] = [Self::Transport, Self::Military, Self::Merchant];

    /// Wire and database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "TRANSPORT",
            Self::Military => "MILITARY",
            Self::Merchant => "MERCHANT",
        }
    }

    /// Parse a caller-supplied ship type. Matching is exact (upper-case).
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid ship type '{s}'. Must be one of: TRANSPORT, MILITARY, MERCHANT"
                ))
            })
    }
}

impl std::fmt::Display for ShipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A stored ship. `rating` is always derived from `speed`, `is_used` and
/// `prod_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: DbId,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: Timestamp,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

/// A validated ship that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: Timestamp,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl NewShip {
    /// Attach a storage-assigned id.
    pub fn into_ship(self, id: DbId) -> Ship {
        Ship {
            id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: self.rating,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body for creating a ship. Every field except `is_used` is
/// required; a caller-supplied `rating` is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShipDraft {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 50, message = "name must be 1-50 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "planet is required"),
        length(min = 1, max = 50, message = "planet must be 1-50 characters")
    )]
    pub planet: Option<String>,
    #[validate(required(message = "shipType is required"))]
    pub ship_type: Option<String>,
    /// Epoch milliseconds.
    #[validate(required(message = "prodDate is required"))]
    pub prod_date: Option<i64>,
    pub is_used: Option<bool>,
    #[validate(
        required(message = "speed is required"),
        range(min = 0.01, max = 0.99, message = "speed must be between 0.01 and 0.99")
    )]
    pub speed: Option<f64>,
    #[validate(
        required(message = "crewSize is required"),
        range(min = 1, max = 9999, message = "crewSize must be between 1 and 9999")
    )]
    pub crew_size: Option<i32>,
}

/// Request body for updating a ship. Absent fields leave the stored value
/// unchanged; present fields are validated with the same rules as create.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShipPatch {
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "planet must be 1-50 characters"))]
    pub planet: Option<String>,
    pub ship_type: Option<String>,
    /// Epoch milliseconds.
    pub prod_date: Option<i64>,
    pub is_used: Option<bool>,
    #[validate(range(min = 0.01, max = 0.99, message = "speed must be between 0.01 and 0.99"))]
    pub speed: Option<f64>,
    #[validate(range(min = 1, max = 9999, message = "crewSize must be between 1 and 9999"))]
    pub crew_size: Option<i32>,
}
