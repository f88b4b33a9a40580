use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::MaintenanceSettings, error::AppError, service::maintenance::MaintenanceService,
};

/// Starts the maintenance scheduler.
///
/// Runs a sweep on `settings.schedule` (six-field cron). A failed sweep is logged and
/// retried only at the next tick.
///
/// # Arguments
/// - `db`: Database connection
/// - `settings`: Schedule plus retention and staleness windows
///
/// # Returns
/// The running scheduler; call `shutdown` on it when the server stops.
pub async fn start_scheduler(
    db: DatabaseConnection,
    settings: MaintenanceSettings,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let schedule = settings.schedule.clone();
    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let settings = settings.clone();

        Box::pin(async move {
            run_sweep(&db, &settings).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started ({})", schedule);

    Ok(scheduler)
}

async fn run_sweep(db: &DatabaseConnection, settings: &MaintenanceSettings) {
    match MaintenanceService::new(db).sweep(settings, Utc::now()).await {
        Ok(report) => tracing::info!(
            "Maintenance sweep released {} starship(s), failed {} stale shipment(s), purged {} history row(s)",
            report.released_starships,
            report.failed_shipments,
            report.purged_shipments
        ),
        Err(e) => tracing::error!("Maintenance sweep failed: {}", e),
    }
}
