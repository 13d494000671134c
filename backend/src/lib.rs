//! Rent-a-Dad: register, log in and book time with a dad.
//!
//! - [`domain`]: fields, validation, actions, the controller and its ports.
//! - [`inbound`]: the actix-web adapter rendering pages with maud.
//! - [`outbound`]: Diesel, in-memory and password-hashing adapters.
//! - [`middleware`]: request tracing.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use middleware::Trace;
