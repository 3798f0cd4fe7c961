use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::truck::domain::Truck;
use crate::truck::repository::TruckRepository;

/// SeaORM-backed repository implementation.
///
/// Each `save` runs its duplicate check and write in one transaction, and the
/// unique index on `truck_number` backs it up against concurrent writers.
pub struct SeaOrmTruckRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTruckRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl TruckRepository for SeaOrmTruckRepository {
    async fn save(&self, truck: Truck) -> Result<Truck, ServiceError> {
        let fields = truck.fields();
        let saved = match truck.id {
            None => models::truck::create(&self.db, fields).await?,
            Some(id) => models::truck::replace(&self.db, id, fields).await?,
        };
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Truck>, ServiceError> {
        Ok(models::truck::find_by_id(&self.db, id).await?.map(Truck::from))
    }

    async fn find_by_truck_number(&self, truck_number: &str) -> Result<Option<Truck>, ServiceError> {
        Ok(models::truck::find_by_truck_number(&self.db, truck_number).await?.map(Truck::from))
    }

    async fn find_all(&self) -> Result<Vec<Truck>, ServiceError> {
        let rows = models::truck::list_all(&self.db).await?;
        Ok(rows.into_iter().map(Truck::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::truck::delete(&self.db, id).await?)
    }
}
