//! Truck module: three-layer architecture (domain, repository, service).
//!
//! Registration, update, lookup and removal of fleet trucks.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::Truck;
pub use service::TruckService;
