//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They open the request
//! transaction, enforce the business rules (name uniqueness, status guards, the
//! loading capacity checks) and return domain models.

pub mod cargo;
pub mod maintenance;
pub mod shipment;
pub mod starship;

#[cfg(test)]
mod test;
