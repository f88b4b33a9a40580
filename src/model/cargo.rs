use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Dilithium Crystals",
    "quantity": 100,
    "weight": 10.5,
    "volume": 2.3
}))]
pub struct CargoDto {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub weight: f64,
    pub volume: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCargoDto {
    /// Unique name, 2 to 100 characters.
    pub name: String,
    /// Units on hand, 0 to 1,000,000.
    pub quantity: i32,
    /// Weight of one unit, greater than 0 and at most 10,000.
    pub weight: f64,
    /// Volume of one unit, greater than 0 and at most 1,000.
    pub volume: f64,
}

/// Partial cargo update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateCargoDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryQueryDto {
    /// Number of items to skip, default 0.
    pub skip: Option<i64>,
    /// Page size between 1 and 1000, default 100.
    pub limit: Option<i64>,
}
