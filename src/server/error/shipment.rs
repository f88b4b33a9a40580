use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::model::{shipment::ShipmentStatus, starship::StarshipStatus},
};

/// Precondition failures of the loading workflow.
#[derive(Error, Debug, PartialEq)]
pub enum ShipmentError {
    #[error("Starship with ID {0} not found")]
    StarshipNotFound(i32),

    #[error("Cargo with ID {0} not found")]
    CargoNotFound(i32),

    #[error("Shipment with ID {0} not found")]
    ShipmentNotFound(i32),

    /// Only an `available` starship can start loading.
    #[error("Starship {starship_id} is not available for loading (status: {status})")]
    StarshipUnavailable {
        starship_id: i32,
        status: StarshipStatus,
    },

    #[error("Insufficient cargo quantity: {available} available, {requested} requested")]
    InsufficientCargo { available: i32, requested: i32 },

    /// Remaining weight capacity after the loads already in progress.
    #[error("Weight capacity exceeded: only {available:.2} remaining")]
    CapacityExceeded { available: f64 },

    /// Remaining hold volume after the loads already in progress.
    #[error("Volume capacity exceeded: only {available:.2} remaining")]
    VolumeExceeded { available: f64 },

    #[error("Shipment {shipment_id} is not loading (status: {status})")]
    NotLoading {
        shipment_id: i32,
        status: ShipmentStatus,
    },

    #[error("Shipment {shipment_id} cannot transition to {to}")]
    InvalidTransition {
        shipment_id: i32,
        to: ShipmentStatus,
    },
}

/// Missing records map to 404, every other rule violation to 400.
impl IntoResponse for ShipmentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::StarshipNotFound(_) | Self::CargoNotFound(_) | Self::ShipmentNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
