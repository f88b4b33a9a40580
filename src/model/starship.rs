use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StarshipStatusDto {
    Available,
    Maintenance,
    InFlight,
    Loading,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Millennium Falcon",
    "capacity": 100000.0,
    "volume": 5000.0,
    "range": 1000000.0,
    "status": "available"
}))]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub capacity: f64,
    pub volume: f64,
    pub range: f64,
    pub status: StarshipStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateStarshipDto {
    /// Unique name, 2 to 100 characters.
    pub name: String,
    /// Maximum cargo weight, greater than 0 and at most 1,000,000.
    pub capacity: f64,
    /// Cargo hold volume, greater than 0 and at most 1,000,000.
    pub volume: f64,
    /// Flight range, greater than 0 and at most 10,000,000.
    pub range: f64,
    /// Initial status; defaults to `available`.
    #[serde(default)]
    pub status: Option<StarshipStatusDto>,
}

/// Partial starship update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateStarshipDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capacity: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub range: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateStarshipStatusDto {
    pub status: StarshipStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoadedCargoDto {
    pub shipment_id: i32,
    pub cargo_id: i32,
    pub cargo_name: String,
    pub quantity: i32,
    pub weight: f64,
    pub volume: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StarshipLoadDto {
    pub starship_id: i32,
    pub starship_name: String,
    pub total_capacity: f64,
    pub total_volume: f64,
    pub current_weight: f64,
    pub current_volume: f64,
    pub available_weight: f64,
    pub available_volume: f64,
    pub loaded_cargo: Vec<LoadedCargoDto>,
}

/// Filters for the available-starships listing.
#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailableStarshipsQueryDto {
    /// Only starships with at least this weight capacity.
    pub min_capacity: Option<f64>,
    /// Only starships with at least this range.
    pub min_range: Option<f64>,
}
