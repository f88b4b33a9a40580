//! SeaORM entities for the starship warehouse schema.

pub mod prelude;

pub mod cargo;
pub mod shipment_history;
pub mod starship;
