use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cargo::CargoRepository, shipment::ShipmentRepository, starship::StarshipRepository},
    error::{shipment::ShipmentError, AppError},
    model::{
        shipment::{
            CreateShipmentParams, Shipment, ShipmentHistoryFilter, ShipmentStatus,
            UpdateShipmentStatusParams,
        },
        starship::{Starship, StarshipLoad, StarshipStatus},
    },
    service::starship::load_lines,
};

/// The loading workflow.
///
/// Every operation runs in one transaction. Loads lock the starship row and then the
/// cargo row; status transitions lock the shipment first, then its starship and cargo.
pub struct ShipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads `quantity` units of a cargo onto a starship.
    ///
    /// Checks, in order: starship exists, starship is available, cargo exists, enough
    /// cargo on hand, and the batch fits next to the loads already in progress. On
    /// success the cargo is decremented, the starship moves to `loading` and a
    /// `loading` shipment is recorded.
    ///
    /// # Returns
    /// - `Ok(Shipment)` - The new shipment with starship and cargo names
    /// - `Err(AppError::ShipmentErr)` - A precondition failed; nothing was written
    pub async fn create(&self, params: CreateShipmentParams) -> Result<Shipment, AppError> {
        let txn = self.db.begin().await?;
        let starships = StarshipRepository::new(&txn);
        let cargos = CargoRepository::new(&txn);
        let shipments = ShipmentRepository::new(&txn);

        let starship = starships
            .find_by_id_for_update(params.starship_id)
            .await?
            .ok_or(ShipmentError::StarshipNotFound(params.starship_id))?;

        let status = StarshipStatus::from_entity(starship.status);
        if status != StarshipStatus::Available {
            return Err(ShipmentError::StarshipUnavailable {
                starship_id: starship.id,
                status,
            }
            .into());
        }

        let cargo = cargos
            .find_by_id_for_update(params.cargo_id)
            .await?
            .ok_or(ShipmentError::CargoNotFound(params.cargo_id))?;

        if cargo.quantity < params.quantity {
            return Err(ShipmentError::InsufficientCargo {
                available: cargo.quantity,
                requested: params.quantity,
            }
            .into());
        }

        let in_progress = shipments.get_loading_with_cargo(starship.id).await?;
        let load = StarshipLoad::new(
            Starship::from_entity(starship.clone()),
            load_lines(in_progress)?,
        );
        let quantity = f64::from(params.quantity);
        load.check_fits(quantity * cargo.weight, quantity * cargo.volume)?;

        let starship_name = starship.name.clone();
        let remaining = cargo.quantity - params.quantity;
        let cargo = cargos.set_quantity(cargo, remaining).await?;
        starships
            .set_status(starship, StarshipStatus::Loading)
            .await?;
        let shipment = shipments.create(params, Utc::now()).await?;

        txn.commit().await?;

        tracing::info!(
            "Shipment {} loading {} x {} onto starship {}",
            shipment.id,
            shipment.quantity,
            cargo.name,
            shipment.starship_id
        );

        Ok(Shipment::from_entity(shipment, starship_name, cargo.name))
    }

    /// Cancels a loading shipment and returns its cargo to stock.
    pub async fn cancel(&self, id: i32) -> Result<Shipment, AppError> {
        self.transition(id, ShipmentStatus::Cancelled).await
    }

    /// Finishes a loading shipment with `completed`, `cancelled` or `failed`.
    pub async fn update_status(
        &self,
        params: UpdateShipmentStatusParams,
    ) -> Result<Shipment, AppError> {
        self.transition(params.id, params.status).await
    }

    /// Filtered history, newest first.
    pub async fn get_history(&self, filter: ShipmentHistoryFilter) -> Result<Vec<Shipment>, AppError> {
        Ok(ShipmentRepository::new(self.db).get_filtered(filter).await?)
    }

    /// Moves a `loading` shipment to a terminal status.
    ///
    /// Cancelled and failed shipments return their quantity to the cargo. The starship
    /// goes back to `available` once none of its shipments is loading.
    async fn transition(&self, id: i32, target: ShipmentStatus) -> Result<Shipment, AppError> {
        let txn = self.db.begin().await?;
        let starships = StarshipRepository::new(&txn);
        let cargos = CargoRepository::new(&txn);
        let shipments = ShipmentRepository::new(&txn);

        let shipment = shipments
            .find_by_id_for_update(id)
            .await?
            .ok_or(ShipmentError::ShipmentNotFound(id))?;

        let current = ShipmentStatus::from_entity(shipment.status);
        if current != ShipmentStatus::Loading {
            return Err(ShipmentError::NotLoading {
                shipment_id: id,
                status: current,
            }
            .into());
        }
        if target == ShipmentStatus::Loading {
            return Err(ShipmentError::InvalidTransition {
                shipment_id: id,
                to: target,
            }
            .into());
        }

        let starship = starships
            .find_by_id_for_update(shipment.starship_id)
            .await?
            .ok_or(ShipmentError::StarshipNotFound(shipment.starship_id))?;
        let cargo = cargos
            .find_by_id_for_update(shipment.cargo_id)
            .await?
            .ok_or(ShipmentError::CargoNotFound(shipment.cargo_id))?;

        let cargo_name = cargo.name.clone();
        if target.restores_cargo() {
            let restored = cargo.quantity.checked_add(shipment.quantity).ok_or_else(|| {
                AppError::InternalError(format!("Cargo {} quantity overflow", cargo.id))
            })?;
            cargos.set_quantity(cargo, restored).await?;
        }

        let shipment = shipments.set_status(shipment, target).await?;

        let starship_name = starship.name.clone();
        if StarshipStatus::from_entity(starship.status) == StarshipStatus::Loading
            && !shipments.has_loading(starship.id).await?
        {
            starships
                .set_status(starship, StarshipStatus::Available)
                .await?;
        }

        txn.commit().await?;

        tracing::info!("Shipment {} is now {}", shipment.id, target);

        Ok(Shipment::from_entity(shipment, starship_name, cargo_name))
    }
}
