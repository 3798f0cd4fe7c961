use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("truck number already in use: {0}")]
    DuplicateTruckNumber(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::DuplicateTruckNumber(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Storage(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => ServiceError::Validation(m),
            ModelError::ConstraintViolation(m) => ServiceError::DuplicateTruckNumber(m),
            ModelError::NotFound(m) => ServiceError::NotFound(m),
            ModelError::Db(m) => ServiceError::Storage(m),
        }
    }
}
