//! HTTP handlers.
//!
//! Controllers extract and validate the request, convert DTOs into parameter types,
//! call a service and convert the resulting domain models back into DTOs. Each
//! handler carries its OpenAPI description.

pub mod cargo;
pub mod history;
pub mod shipment;
pub mod starship;

#[cfg(test)]
mod test;
