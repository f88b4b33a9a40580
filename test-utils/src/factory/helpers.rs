//! Shared helper utilities for factory methods.

use entity::{shipment_history::ShipmentStatus, starship::StarshipStatus};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{cargo::CargoFactory, shipment::ShipmentFactory, starship::StarshipFactory};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a starship in `loading` status with one loading shipment of default cargo.
///
/// Mirrors the state the load workflow leaves behind: the cargo quantity has already
/// been reduced by the shipment quantity.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((starship, cargo, shipment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loading_shipment(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::starship::Model,
        entity::cargo::Model,
        entity::shipment_history::Model,
    ),
    DbErr,
> {
    let starship = StarshipFactory::new(db)
        .status(StarshipStatus::Loading)
        .build()
        .await?;
    let cargo = CargoFactory::new(db).quantity(90).build().await?;
    let shipment = ShipmentFactory::new(db, starship.id, cargo.id)
        .quantity(10)
        .status(ShipmentStatus::Loading)
        .build()
        .await?;

    Ok((starship, cargo, shipment))
}
