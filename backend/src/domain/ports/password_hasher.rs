//! Port for one-way password hashing.

use crate::domain::PlainPassword;

use super::define_port_error;

define_port_error! {
    /// Errors raised while hashing or checking a password.
    pub enum PasswordHashError {
        /// The stored hash could not be parsed.
        Malformed { message: String } => "stored password hash is malformed: {message}",
        /// A new hash could not be produced.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Turns plain-text passwords into storable hashes and checks them later.
///
/// Hashing is CPU-bound and synchronous; implementations must not block on
/// I/O.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a fresh salt.
    fn hash(&self, password: &PlainPassword) -> Result<String, PasswordHashError>;

    /// Whether `password` matches `stored`.
    fn verify(&self, password: &PlainPassword, stored: &str) -> Result<bool, PasswordHashError>;
}
