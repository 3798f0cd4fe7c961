#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Private in-memory sqlite database per call, schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout_secs: 10,
        ..Default::default()
    };
    models::db::connect_and_migrate(&cfg).await
}
