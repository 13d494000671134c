//! In-process storage used when no database is configured, and by tests.
//!
//! One [`InMemoryRentalStore`] implements all three repository ports over a
//! single mutex, so every insert is atomic with respect to concurrent reads.

mod store;

pub use store::{InMemoryRentalStore, sample_dads};
