use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::MaintenanceSettings,
    data::{cargo::CargoRepository, shipment::ShipmentRepository, starship::StarshipRepository},
    error::AppError,
    model::{maintenance::SweepReport, shipment::ShipmentStatus, starship::StarshipStatus},
};

/// Periodic cleanup of stuck loads and old history.
pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs one sweep in a single transaction.
    ///
    /// A `loading` starship whose latest shipment is older than the staleness window
    /// (or that has no shipment at all) is released: its remaining `loading` shipments
    /// are marked `failed`, their cargo goes back to stock and the starship becomes
    /// `available`. Afterwards finished history rows past retention are deleted.
    ///
    /// Any error rolls the whole sweep back.
    ///
    /// # Arguments
    /// - `settings` - Retention and staleness windows
    /// - `now` - Reference time for both windows
    pub async fn sweep(
        &self,
        settings: &MaintenanceSettings,
        now: DateTime<Utc>,
    ) -> Result<SweepReport, AppError> {
        let txn = self.db.begin().await?;
        let starships = StarshipRepository::new(&txn);
        let cargos = CargoRepository::new(&txn);
        let shipments = ShipmentRepository::new(&txn);

        let stale_before = now - settings.stuck_loading_after;
        let mut report = SweepReport::default();

        for candidate in starships.get_by_status(StarshipStatus::Loading).await? {
            let is_stale = match shipments.latest_created_at(candidate.id).await? {
                Some(latest) => latest < stale_before,
                None => true,
            };
            if !is_stale {
                continue;
            }

            // Same order as a status transition: shipments, then starship, then cargo.
            let loading = shipments.get_loading_for_starship(candidate.id).await?;
            let Some(starship) = starships.find_by_id_for_update(candidate.id).await? else {
                continue;
            };
            if StarshipStatus::from_entity(starship.status) != StarshipStatus::Loading {
                continue;
            }

            for shipment in loading {
                if ShipmentStatus::from_entity(shipment.status) != ShipmentStatus::Loading {
                    continue;
                }
                if let Some(cargo) = cargos.find_by_id_for_update(shipment.cargo_id).await? {
                    let restored = cargo.quantity.saturating_add(shipment.quantity);
                    cargos.set_quantity(cargo, restored).await?;
                }
                shipments.set_status(shipment, ShipmentStatus::Failed).await?;
                report.failed_shipments += 1;
            }

            tracing::warn!("Releasing starship {} stuck in loading", starship.id);
            starships
                .set_status(starship, StarshipStatus::Available)
                .await?;
            report.released_starships += 1;
        }

        report.purged_shipments = shipments
            .delete_finished_before(now - settings.history_retention)
            .await?;

        txn.commit().await?;

        Ok(report)
    }
}
