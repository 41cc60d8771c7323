//! Fleet registry domain core.
//!
//! Holds the ship model and the query/validation/rating engine. Nothing in
//! here knows about HTTP or SQL; persistence is reached through the
//! [`storage::ShipStorage`] port.

pub mod error;
pub mod filter;
pub mod lifecycle;
pub mod query;
pub mod rating;
pub mod ship;
pub mod storage;
pub mod types;
pub mod validation;
