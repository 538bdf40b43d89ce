//! SQLite persistence adapters built on Diesel.

pub mod diesel_case_repository;
pub mod diesel_credential_service;
pub mod diesel_task_repository;
pub mod models;
pub mod pool;
pub mod schema;

pub use diesel_case_repository::DieselCaseRepository;
pub use diesel_credential_service::DieselCredentialService;
pub use diesel_task_repository::DieselTaskRepository;
pub use pool::{DbPool, PoolConfig, PoolError, MIGRATIONS};
