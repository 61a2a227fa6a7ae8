//! HTTP server for the production report engine.
//!
//! Reads the service configuration from `PRODUCTION_REPORTS_CONFIG`
//! (default `./config/service.yaml`), loads the seed data and serves the
//! report API.

use std::sync::Arc;

use production_reports::api::{create_router, AppState};
use production_reports::config::ConfigLoader;
use production_reports::logging;
use production_reports::ports::ReadPorts;
use production_reports::reports::ReportService;
use production_reports::store::SeedLoader;
use tracing::info;

const CONFIG_ENV: &str = "PRODUCTION_REPORTS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let loader = ConfigLoader::load(&config_path)?;
    let config = loader.config();

    logging::init(&config.logging.filter);
    info!(config = %config_path, "Configuration loaded");

    let store = SeedLoader::load(&config.data.seed_dir)?;

    let service = ReportService::new(ReadPorts::from_store(Arc::new(store)));
    let router = create_router(AppState::new(service));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
