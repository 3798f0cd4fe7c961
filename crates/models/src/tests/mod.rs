/// Row-level CRUD on the truck table
pub mod crud_tests;


use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory sqlite database with the schema applied.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    crate::db::connect_and_migrate(&cfg).await
}

pub fn fields(truck_number: &str, driver_name: &str) -> crate::truck::Fields {
    crate::truck::Fields {
        truck_number: truck_number.into(),
        driver_name: driver_name.into(),
        ..Default::default()
    }
}
