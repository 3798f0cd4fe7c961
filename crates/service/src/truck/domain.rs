use serde::{Deserialize, Serialize};

/// Domain truck (business view). `id` is `None` until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub truck_number: String,
    pub driver_name: String,
    #[serde(default)]
    pub driver_contact: Option<String>,
    #[serde(default)]
    pub truck_type: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
}

impl Truck {
    /// Unsaved truck with only the required fields.
    pub fn new(truck_number: impl Into<String>, driver_name: impl Into<String>) -> Self {
        Self { truck_number: truck_number.into(), driver_name: driver_name.into(), ..Default::default() }
    }

    pub fn from_parts(
        id: Option<i64>,
        truck_number: impl Into<String>,
        driver_name: impl Into<String>,
        driver_contact: Option<String>,
        truck_type: Option<String>,
        capacity: Option<i32>,
    ) -> Self {
        Self {
            id,
            truck_number: truck_number.into(),
            driver_name: driver_name.into(),
            driver_contact,
            truck_type,
            capacity,
        }
    }

    pub fn with_driver_contact(mut self, contact: impl Into<String>) -> Self {
        self.driver_contact = Some(contact.into());
        self
    }

    pub fn with_truck_type(mut self, truck_type: impl Into<String>) -> Self {
        self.truck_type = Some(truck_type.into());
        self
    }

    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Field-wise equality ignoring `id`.
    pub fn same_fields(&self, other: &Truck) -> bool {
        self.fields() == other.fields()
    }

    pub(crate) fn fields(&self) -> models::truck::Fields {
        models::truck::Fields {
            truck_number: self.truck_number.clone(),
            driver_name: self.driver_name.clone(),
            driver_contact: self.driver_contact.clone(),
            truck_type: self.truck_type.clone(),
            capacity: self.capacity,
        }
    }
}

impl From<models::truck::Model> for Truck {
    fn from(m: models::truck::Model) -> Self {
        Self {
            id: Some(m.id),
            truck_number: m.truck_number,
            driver_name: m.driver_name,
            driver_contact: m.driver_contact,
            truck_type: m.truck_type,
            capacity: m.capacity,
        }
    }
}
