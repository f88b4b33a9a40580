//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each. They take domain parameter
//! types, return entity models (or domain models where a query already enriches the
//! rows) and are generic over `ConnectionTrait` so services can run several of them
//! inside one transaction.

pub mod cargo;
pub mod shipment;
pub mod starship;

#[cfg(test)]
mod test;
