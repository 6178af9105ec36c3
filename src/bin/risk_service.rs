use std::env;
use std::path::PathBuf;

use authhub_risk::config::{self, Config};
use authhub_risk::detection::RiskEvaluator;
use authhub_risk::service::{self, SERVICE_NAME};

/// HTTP daemon serving login risk assessments
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    let config = Config::load(&config_path)?;

    // RUST_LOG still overrides the configured level
    config::logger(config.log_level(), env::var("RUST_LOG").ok().as_deref()).init();

    log::info!("Starting {}", SERVICE_NAME);
    if !config_path.exists() {
        log::warn!("Config file {:?} not found, using defaults", config_path);
    }
    log::info!("Port: {}", config.server.port);
    log::info!("Debug: {}", config.server.debug);

    service::run(&config.server, RiskEvaluator::new()).await?;

    log::info!("{} stopped", SERVICE_NAME);
    Ok(())
}
