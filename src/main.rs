mod model;
mod server;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, scheduler::maintenance, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let mut scheduler = maintenance::start_scheduler(db.clone(), config.maintenance.clone()).await?;

    let state = AppState::new(db, config.api_token.clone(), config.name_matching);
    let app = router::router(state, &config)?;

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    scheduler.shutdown().await?;
    tracing::info!("Server stopped");

    Ok(())
}
