//! Starship factory for creating test starship entities.

use crate::factory::helpers::next_id;
use entity::starship::StarshipStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test starships with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let starship = StarshipFactory::new(&db)
///     .capacity(1000.0)
///     .status(StarshipStatus::Maintenance)
///     .build()
///     .await?;
/// ```
pub struct StarshipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    capacity: f64,
    volume: f64,
    range: f64,
    status: StarshipStatus,
}

impl<'a> StarshipFactory<'a> {
    /// Creates a new StarshipFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Starship {id}"` where id is auto-incremented
    /// - capacity: `1000.0`
    /// - volume: `500.0`
    /// - range: `10000.0`
    /// - status: `Available`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Starship {}", id),
            capacity: 1000.0,
            volume: 500.0,
            range: 10_000.0,
            status: StarshipStatus::Available,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    pub fn status(mut self, status: StarshipStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the starship entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::starship::Model)` - Created starship entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            capacity: ActiveValue::Set(self.capacity),
            volume: ActiveValue::Set(self.volume),
            range: ActiveValue::Set(self.range),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available starship with default values.
///
/// Shorthand for `StarshipFactory::new(db).build().await`.
pub async fn create_starship(db: &DatabaseConnection) -> Result<entity::starship::Model, DbErr> {
    StarshipFactory::new(db).build().await
}
