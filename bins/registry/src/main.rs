use std::path::Path;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use common::utils::logging;
use configs::AppConfig;
use service::truck::{repo::SeaOrmTruckRepository, TruckService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Prefer config.toml; fall back to the environment alone
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let from_file = Path::new(&path).exists();
    let cfg = if from_file { AppConfig::load_and_validate()? } else { AppConfig::from_env()? };

    logging::init_logging(&cfg.log);
    if !from_file {
        warn!(%path, "config file not found; using environment only");
    }

    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let registry = TruckService::new(Arc::new(SeaOrmTruckRepository::new(db)));

    let trucks = registry.get_all_trucks().await?;
    info!(trucks = trucks.len(), "truck registry ready");
    Ok(())
}
