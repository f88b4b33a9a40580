use chrono::{Duration, Utc};
use entity::{shipment_history::ShipmentStatus as EntityShipmentStatus, starship::StarshipStatus as EntityStarshipStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, cargo::CargoFactory, shipment::ShipmentFactory, starship::StarshipFactory},
};

use crate::server::config::NameMatching;

mod cargo;
mod shipment;
mod starship;
