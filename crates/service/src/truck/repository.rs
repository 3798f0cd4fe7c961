use async_trait::async_trait;

use super::domain::Truck;
use crate::errors::ServiceError;

/// Repository abstraction for truck persistence.
///
/// Absence is `Ok(None)` / `Ok(false)`, never an error. `save` inserts when the
/// truck has no id and replaces the stored row otherwise; a truck number held
/// by another row yields `DuplicateTruckNumber`.
#[async_trait]
pub trait TruckRepository: Send + Sync {
    async fn save(&self, truck: Truck) -> Result<Truck, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Truck>, ServiceError>;
    async fn find_by_truck_number(&self, truck_number: &str) -> Result<Option<Truck>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Truck>, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        last_id: i64,
        rows: BTreeMap<i64, Truck>, // key: id
    }

    /// Ids come from a counter that never goes backwards, so deleted ids are not reused.
    #[derive(Default)]
    pub struct MockTruckRepository {
        state: Mutex<State>,
    }

    impl MockTruckRepository {
        fn lock(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.state.lock().map_err(|_| ServiceError::Storage("mock store poisoned".into()))
        }
    }

    fn taken_by_other(rows: &BTreeMap<i64, Truck>, truck_number: &str, id: Option<i64>) -> bool {
        rows.values().any(|t| t.truck_number == truck_number && t.id != id)
    }

    #[async_trait]
    impl TruckRepository for MockTruckRepository {
        async fn save(&self, mut truck: Truck) -> Result<Truck, ServiceError> {
            let mut state = self.lock()?;
            if taken_by_other(&state.rows, &truck.truck_number, truck.id) {
                return Err(ServiceError::DuplicateTruckNumber(truck.truck_number));
            }
            let id = match truck.id {
                Some(id) if state.rows.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::NotFound(format!("truck {id}"))),
                None => {
                    state.last_id += 1;
                    state.last_id
                }
            };
            truck.id = Some(id);
            state.rows.insert(id, truck.clone());
            Ok(truck)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Truck>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn find_by_truck_number(&self, truck_number: &str) -> Result<Option<Truck>, ServiceError> {
            Ok(self.lock()?.rows.values().find(|t| t.truck_number == truck_number).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Truck>, ServiceError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.remove(&id).is_some())
        }
    }

}
