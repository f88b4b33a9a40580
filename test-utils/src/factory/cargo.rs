//! Cargo factory for creating test cargo entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cargo with customizable fields.
pub struct CargoFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    quantity: i32,
    weight: f64,
    volume: f64,
}

impl<'a> CargoFactory<'a> {
    /// Creates a new CargoFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Cargo {id}"` where id is auto-incremented
    /// - quantity: `100`
    /// - weight: `10.0`
    /// - volume: `5.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Cargo {}", id),
            quantity: 100,
            weight: 10.0,
            volume: 5.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Builds and inserts the cargo entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::cargo::Model)` - Created cargo entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::cargo::Model, DbErr> {
        entity::cargo::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            quantity: ActiveValue::Set(self.quantity),
            weight: ActiveValue::Set(self.weight),
            volume: ActiveValue::Set(self.volume),
        }
        .insert(self.db)
        .await
    }
}

/// Creates cargo with default values.
///
/// Shorthand for `CargoFactory::new(db).build().await`.
pub async fn create_cargo(db: &DatabaseConnection) -> Result<entity::cargo::Model, DbErr> {
    CargoFactory::new(db).build().await
}
