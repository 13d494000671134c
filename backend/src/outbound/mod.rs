//! Driven adapters implementing the domain ports.
//!
//! - **persistence**: PostgreSQL repositories over Diesel.
//! - **memory**: mutex-guarded repositories for database-free runs.
//! - **password**: salted SHA-256 password hashing.

pub mod memory;
pub mod password;
pub mod persistence;
