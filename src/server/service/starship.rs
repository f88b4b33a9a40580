use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::NameMatching,
    data::{shipment::ShipmentRepository, starship::StarshipRepository},
    error::AppError,
    model::starship::{
        AvailableStarshipsFilter, CreateStarshipParams, LoadLine, Starship, StarshipLoad,
        StarshipStatus, UpdateStarshipParams, UpdateStarshipStatusParams,
    },
};

/// Starship CRUD with the status and reference guards.
pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
    name_matching: NameMatching,
}

impl<'a> StarshipService<'a> {
    pub fn new(db: &'a DatabaseConnection, name_matching: NameMatching) -> Self {
        Self { db, name_matching }
    }

    pub async fn get_all(&self) -> Result<Vec<Starship>, AppError> {
        let starships = StarshipRepository::new(self.db).get_all().await?;

        Ok(starships.into_iter().map(Starship::from_entity).collect())
    }

    pub async fn get_available(
        &self,
        filter: AvailableStarshipsFilter,
    ) -> Result<Vec<Starship>, AppError> {
        let starships = StarshipRepository::new(self.db).get_available(filter).await?;

        Ok(starships.into_iter().map(Starship::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Starship>, AppError> {
        let starship = StarshipRepository::new(self.db).find_by_id(id).await?;

        Ok(starship.map(Starship::from_entity))
    }

    /// Creates a starship after checking its name is free.
    ///
    /// # Returns
    /// - `Ok(Starship)` - The stored starship
    /// - `Err(AppError::Conflict)` - The name is already used
    pub async fn create(&self, params: CreateStarshipParams) -> Result<Starship, AppError> {
        let txn = self.db.begin().await?;
        let repo = StarshipRepository::new(&txn);

        if repo.name_taken(&params.name, self.name_matching, None).await? {
            return Err(duplicate_name(&params.name));
        }

        let starship = repo.create(params).await?;
        txn.commit().await?;

        tracing::info!("Created starship {} ({})", starship.id, starship.name);

        Ok(Starship::from_entity(starship))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Starship))` - The updated starship
    /// - `Ok(None)` - No starship with that id
    /// - `Err(AppError::Conflict)` - Starship is loading or in flight, or the new name is taken
    pub async fn update(&self, params: UpdateStarshipParams) -> Result<Option<Starship>, AppError> {
        let txn = self.db.begin().await?;
        let repo = StarshipRepository::new(&txn);

        let Some(starship) = repo.find_by_id_for_update(params.id).await? else {
            return Ok(None);
        };

        ensure_editable(&starship, "modified")?;

        if let Some(name) = &params.name {
            if *name != starship.name
                && repo
                    .name_taken(name, self.name_matching, Some(starship.id))
                    .await?
            {
                return Err(duplicate_name(name));
            }
        }

        let updated = repo.update(starship, params).await?;
        txn.commit().await?;

        Ok(Some(Starship::from_entity(updated)))
    }

    /// Moves a starship between the operational statuses.
    ///
    /// A `loading` starship is owned by its shipments and cannot be changed here.
    pub async fn update_status(
        &self,
        params: UpdateStarshipStatusParams,
    ) -> Result<Option<Starship>, AppError> {
        let txn = self.db.begin().await?;
        let repo = StarshipRepository::new(&txn);

        let Some(starship) = repo.find_by_id_for_update(params.id).await? else {
            return Ok(None);
        };

        if StarshipStatus::from_entity(starship.status) == StarshipStatus::Loading {
            return Err(AppError::Conflict(format!(
                "Starship {} is loading; its status follows its shipments",
                starship.id
            )));
        }

        let updated = repo.set_status(starship, params.status).await?;
        txn.commit().await?;

        tracing::info!("Starship {} is now {}", updated.id, params.status);

        Ok(Some(Starship::from_entity(updated)))
    }

    /// Deletes a starship that is neither busy nor referenced by shipment history.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No starship with that id
    /// - `Err(AppError::Conflict)` - Status or history guard failed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = StarshipRepository::new(&txn);

        let Some(starship) = repo.find_by_id_for_update(id).await? else {
            return Ok(false);
        };

        ensure_editable(&starship, "deleted")?;

        if ShipmentRepository::new(&txn).exists_for_starship(id).await? {
            return Err(AppError::Conflict(format!(
                "Starship {} has shipment history and cannot be deleted",
                id
            )));
        }

        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted starship {}", id);

        Ok(true)
    }

    /// Summarizes what is currently being loaded onto a starship.
    pub async fn get_load(&self, id: i32) -> Result<Option<StarshipLoad>, AppError> {
        let Some(starship) = StarshipRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let rows = ShipmentRepository::new(self.db)
            .get_loading_with_cargo(id)
            .await?;

        Ok(Some(StarshipLoad::new(
            Starship::from_entity(starship),
            load_lines(rows)?,
        )))
    }
}

/// Pairs loading shipments with their cargo. A missing cargo row means the foreign
/// key was bypassed and is reported as an internal error.
pub(super) fn load_lines(
    rows: Vec<(
        entity::shipment_history::Model,
        Option<entity::cargo::Model>,
    )>,
) -> Result<Vec<LoadLine>, AppError> {
    rows.into_iter()
        .map(|(shipment, cargo)| match cargo {
            Some(cargo) => Ok(LoadLine::from_entities(shipment, cargo)),
            None => Err(AppError::InternalError(format!(
                "Shipment {} references missing cargo {}",
                shipment.id, shipment.cargo_id
            ))),
        })
        .collect()
}

fn ensure_editable(starship: &entity::starship::Model, action: &str) -> Result<(), AppError> {
    let status = StarshipStatus::from_entity(starship.status);
    if status.is_editable() {
        return Ok(());
    }

    Err(AppError::Conflict(format!(
        "Starship {} cannot be {} while {}",
        starship.id, action, status
    )))
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("A starship named '{}' already exists", name))
}
