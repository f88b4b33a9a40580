use chrono::{Duration, Utc};
use entity::{
    shipment_history::ShipmentStatus as EntityShipmentStatus,
    starship::StarshipStatus as EntityStarshipStatus,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, cargo::CargoFactory, shipment::ShipmentFactory, starship::StarshipFactory},
};

use crate::server::{
    config::NameMatching,
    error::{shipment::ShipmentError, AppError},
};

mod starship;

async fn reload_starship(
    db: &DatabaseConnection,
    id: i32,
) -> Result<entity::starship::Model, AppError> {
    entity::prelude::Starship::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("starship {}", id)))
}

async fn reload_cargo(db: &DatabaseConnection, id: i32) -> Result<entity::cargo::Model, AppError> {
    entity::prelude::Cargo::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("cargo {}", id)))
}
