//! Service layer for the truck registry.
//! - Separates business rules from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod truck;
#[cfg(test)]
pub mod test_support;
