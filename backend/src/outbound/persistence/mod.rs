//! PostgreSQL adapters built on Diesel and `diesel-async`.
//!
//! Row structs and table definitions stay private to this module; the
//! repositories translate them into domain types and map every driver
//! failure into the owning port's error enum.

mod diesel_appointment_repository;
mod diesel_client_repository;
mod diesel_dad_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_appointment_repository::DieselAppointmentRepository;
pub use diesel_client_repository::DieselClientRepository;
pub use diesel_dad_repository::DieselDadRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
