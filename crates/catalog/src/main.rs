use anyhow::{Context, Result};
use catalog::{config::Config, handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::ConnectionManager,
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::init("catalog", &config.otel_endpoint)
        .context("Failed to initialize telemetry")?;

    init_logger(
        telemetry.logger_provider(),
        "catalog",
        config.dev_mode,
        config.enable_file_log,
    );

    let pool = ConnectionManager::new_pool(
        &config.database.url,
        config.database.min_connections,
        config.database.max_connections,
    )
    .await
    .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("🗃️ Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(pool);

    info!("🚀 Catalog service starting on port {}", config.port);

    let served = AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server");

    info!("Shutting down servers...");

    if let Err(e) = telemetry.shutdown() {
        error!("❌ Telemetry shutdown failed: {e:?}");
    }

    served
}
