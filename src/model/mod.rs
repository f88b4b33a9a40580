//! Request and response DTOs shared by the HTTP API and its OpenAPI document.

pub mod api;
pub mod cargo;
pub mod shipment;
pub mod starship;
