//! Table-level repositories. Each repository is a zero-sized struct with
//! associated async functions taking the pool explicitly.

pub mod ship_repo;

pub use ship_repo::ShipRepo;
