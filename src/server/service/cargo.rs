use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::NameMatching,
    data::{cargo::CargoRepository, shipment::ShipmentRepository},
    error::AppError,
    model::cargo::{Cargo, CreateCargoParams, InventoryPage, UpdateCargoParams},
};

pub struct CargoService<'a> {
    db: &'a DatabaseConnection,
    name_matching: NameMatching,
}

impl<'a> CargoService<'a> {
    pub fn new(db: &'a DatabaseConnection, name_matching: NameMatching) -> Self {
        Self { db, name_matching }
    }

    pub async fn get_page(&self, page: InventoryPage) -> Result<Vec<Cargo>, AppError> {
        let cargo = CargoRepository::new(self.db).get_page(page).await?;

        Ok(cargo.into_iter().map(Cargo::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Cargo>, AppError> {
        let cargo = CargoRepository::new(self.db).find_by_id(id).await?;

        Ok(cargo.map(Cargo::from_entity))
    }

    pub async fn create(&self, params: CreateCargoParams) -> Result<Cargo, AppError> {
        let txn = self.db.begin().await?;
        let repo = CargoRepository::new(&txn);

        if repo.name_taken(&params.name, self.name_matching, None).await? {
            return Err(duplicate_name(&params.name));
        }

        let cargo = repo.create(params).await?;
        txn.commit().await?;

        tracing::info!("Created cargo {} ({})", cargo.id, cargo.name);

        Ok(Cargo::from_entity(cargo))
    }

    /// Applies a partial update. Returns `Ok(None)` when the cargo does not exist.
    ///
    /// Unit weight and volume are frozen while a `loading` shipment carries the cargo,
    /// since starship loads are computed from them.
    pub async fn update(&self, params: UpdateCargoParams) -> Result<Option<Cargo>, AppError> {
        let txn = self.db.begin().await?;
        let repo = CargoRepository::new(&txn);

        let Some(cargo) = repo.find_by_id_for_update(params.id).await? else {
            return Ok(None);
        };

        if let Some(name) = &params.name {
            if *name != cargo.name
                && repo
                    .name_taken(name, self.name_matching, Some(cargo.id))
                    .await?
            {
                return Err(duplicate_name(name));
            }
        }

        let footprint_changed = params.weight.is_some_and(|weight| weight != cargo.weight)
            || params.volume.is_some_and(|volume| volume != cargo.volume);
        if footprint_changed
            && ShipmentRepository::new(&txn)
                .has_loading_for_cargo(cargo.id)
                .await?
        {
            return Err(AppError::Conflict(format!(
                "Cargo {} is being loaded; its weight and volume cannot change",
                cargo.id
            )));
        }

        let updated = repo.update(cargo, params).await?;
        txn.commit().await?;

        Ok(Some(Cargo::from_entity(updated)))
    }

    /// Deletes a cargo item no shipment references. Returns `Ok(false)` when it does
    /// not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = CargoRepository::new(&txn);

        if repo.find_by_id_for_update(id).await?.is_none() {
            return Ok(false);
        }

        if ShipmentRepository::new(&txn).exists_for_cargo(id).await? {
            return Err(AppError::Conflict(format!(
                "Cargo {} has shipment history and cannot be deleted",
                id
            )));
        }

        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted cargo {}", id);

        Ok(true)
    }
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("Cargo named '{}' already exists", name))
}
