//! Shipment factory for creating test shipment history entities.

use chrono::{DateTime, Utc};
use entity::shipment_history::ShipmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shipment history rows with customizable fields.
///
/// The factory only inserts the shipment row; it does not adjust the referenced
/// starship status or cargo quantity.
///
/// # Example
///
/// ```rust,ignore
/// let shipment = ShipmentFactory::new(&db, starship.id, cargo.id)
///     .quantity(25)
///     .status(ShipmentStatus::Completed)
///     .created_at(Utc::now() - Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct ShipmentFactory<'a> {
    db: &'a DatabaseConnection,
    starship_id: i32,
    cargo_id: i32,
    quantity: i32,
    status: ShipmentStatus,
    created_at: DateTime<Utc>,
}

impl<'a> ShipmentFactory<'a> {
    /// Creates a new ShipmentFactory with default values.
    ///
    /// Defaults:
    /// - quantity: `10`
    /// - status: `Completed`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, starship_id: i32, cargo_id: i32) -> Self {
        Self {
            db,
            starship_id,
            cargo_id,
            quantity: 10,
            status: ShipmentStatus::Completed,
            created_at: Utc::now(),
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn status(mut self, status: ShipmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the shipment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shipment_history::Model)` - Created shipment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shipment_history::Model, DbErr> {
        entity::shipment_history::ActiveModel {
            id: ActiveValue::NotSet,
            starship_id: ActiveValue::Set(self.starship_id),
            cargo_id: ActiveValue::Set(self.cargo_id),
            quantity: ActiveValue::Set(self.quantity),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a completed shipment with default values for the given starship and cargo.
pub async fn create_shipment(
    db: &DatabaseConnection,
    starship_id: i32,
    cargo_id: i32,
) -> Result<entity::shipment_history::Model, DbErr> {
    ShipmentFactory::new(db, starship_id, cargo_id).build().await
}
