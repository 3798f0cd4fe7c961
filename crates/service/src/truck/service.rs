use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::Truck;
use super::repository::TruckRepository;
use crate::errors::ServiceError;

/// Application service encapsulating truck registry business rules.
/// Validates input before touching storage and maps absence to `NotFound`.
pub struct TruckService<R: TruckRepository> {
    repo: Arc<R>,
}

impl<R: TruckRepository> TruckService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new truck. Any id on the input is ignored.
    ///
    /// # Examples
    /// ```
    /// use service::truck::{Truck, TruckService, repository::mock::MockTruckRepository};
    /// use std::sync::Arc;
    /// let svc = TruckService::new(Arc::new(MockTruckRepository::default()));
    /// let truck = tokio_test::block_on(svc.register_truck(Truck::new("TRK-001", "Alice").with_capacity(20000))).unwrap();
    /// assert_eq!(truck.id, Some(1));
    /// assert_eq!(truck.capacity, Some(20000));
    /// ```
    #[instrument(skip(self, truck), fields(truck_number = %truck.truck_number))]
    pub async fn register_truck(&self, mut truck: Truck) -> Result<Truck, ServiceError> {
        if let Some(id) = truck.id.take() {
            debug!(supplied_id = id, "ignoring caller supplied id");
        }
        validate(&truck)?;
        if self.repo.find_by_truck_number(&truck.truck_number).await?.is_some() {
            warn!("truck_number_in_use");
            return Err(ServiceError::DuplicateTruckNumber(truck.truck_number));
        }
        let saved = self.repo.save(truck).await?;
        info!(truck_id = ?saved.id, "truck_registered");
        Ok(saved)
    }

    /// Replace every field of truck `id` with those of `truck`.
    ///
    /// # Examples
    /// ```
    /// use service::truck::{Truck, TruckService, repository::mock::MockTruckRepository};
    /// use std::sync::Arc;
    /// let svc = TruckService::new(Arc::new(MockTruckRepository::default()));
    /// let t = tokio_test::block_on(svc.register_truck(Truck::new("TRK-001", "Alice"))).unwrap();
    /// let id = t.id.unwrap();
    /// let updated = tokio_test::block_on(svc.update_truck(id, Truck::new("TRK-002", "Alice").with_capacity(22000))).unwrap();
    /// assert_eq!(updated.id, Some(id));
    /// assert_eq!(updated.truck_number, "TRK-002");
    /// ```
    #[instrument(skip(self, truck), fields(truck_id = id, truck_number = %truck.truck_number))]
    pub async fn update_truck(&self, id: i64, truck: Truck) -> Result<Truck, ServiceError> {
        validate(&truck)?;
        let existing = self.repo.find_by_id(id).await?.ok_or_else(|| {
            debug!("update of unknown truck");
            ServiceError::not_found(&format!("truck {id}"))
        })?;
        if existing.truck_number != truck.truck_number {
            if let Some(other) = self.repo.find_by_truck_number(&truck.truck_number).await? {
                if other.id != Some(id) {
                    warn!(held_by = ?other.id, "truck_number_in_use");
                    return Err(ServiceError::DuplicateTruckNumber(truck.truck_number));
                }
            }
        }
        let saved = self.repo.save(Truck { id: Some(id), ..truck }).await?;
        info!("truck_updated");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn get_truck_by_id(&self, id: i64) -> Result<Truck, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(&format!("truck {id}")))
    }

    #[instrument(skip(self))]
    pub async fn get_all_trucks(&self) -> Result<Vec<Truck>, ServiceError> { self.repo.find_all().await }

    #[instrument(skip(self))]
    pub async fn delete_truck(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete_by_id(id).await? {
            debug!("delete of unknown truck");
            return Err(ServiceError::not_found(&format!("truck {id}")));
        }
        info!(truck_id = id, "truck_deleted");
        Ok(())
    }
}

fn validate(truck: &Truck) -> Result<(), ServiceError> {
    models::truck::validate(&truck.fields()).map_err(|e| {
        debug!(error = %e, "truck_rejected");
        ServiceError::from(e)
    })
}
