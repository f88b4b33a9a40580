use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatusDto {
    Loading,
    Completed,
    Cancelled,
    Failed,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateShipmentDto {
    pub starship_id: i32,
    pub cargo_id: i32,
    /// Units to load, greater than 0.
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateShipmentStatusDto {
    pub status: ShipmentStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "starship_id": 1,
    "starship_name": "Millennium Falcon",
    "cargo_id": 1,
    "cargo_name": "Dilithium Crystals",
    "quantity": 50,
    "status": "loading",
    "created_at": "2024-03-20T10:30:00Z"
}))]
pub struct ShipmentDto {
    pub id: i32,
    pub starship_id: i32,
    pub starship_name: String,
    pub cargo_id: i32,
    pub cargo_name: String,
    pub quantity: i32,
    pub status: ShipmentStatusDto,
    pub created_at: DateTime<Utc>,
}

/// History filters. Dates accept RFC 3339, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`.
#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShipmentHistoryQueryDto {
    pub starship_id: Option<i32>,
    pub cargo_id: Option<i32>,
    pub status: Option<ShipmentStatusDto>,
    /// Inclusive lower bound on `created_at`.
    pub from_date: Option<String>,
    /// Inclusive upper bound on `created_at`; a plain date covers the whole day.
    pub to_date: Option<String>,
}
