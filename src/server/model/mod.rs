//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! request DTOs and carry the field validation, so services only see valid input.

pub mod cargo;
pub mod maintenance;
pub mod shipment;
pub mod starship;
