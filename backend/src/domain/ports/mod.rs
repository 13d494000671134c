//! Ports the controller drives.
//!
//! Adapters implement these traits and translate their failures into the
//! typed error enums declared alongside each trait.

mod macros;
pub(crate) use macros::define_port_error;

mod appointment_repository;
mod client_repository;
mod dad_repository;
mod password_hasher;

#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
pub use appointment_repository::{AppointmentRepository, AppointmentRepositoryError};
#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use client_repository::{ClientRepository, ClientRepositoryError};
#[cfg(test)]
pub use dad_repository::MockDadRepository;
pub use dad_repository::{DadRepository, DadRepositoryError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
