//! Port for the dad catalogue.

use async_trait::async_trait;

use crate::domain::{Dad, DadId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by dad repository adapters.
    pub enum DadRepositoryError {
        /// Storage could not be reached.
        Connection { message: String } => "dad repository connection failed: {message}",
        /// A query failed.
        Query { message: String } => "dad repository query failed: {message}",
    }
}

/// Read-only access to rentable dads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DadRepository: Send + Sync {
    /// Every dad, ordered by identifier.
    async fn all_dads(&self) -> Result<Vec<Dad>, DadRepositoryError>;

    /// A single dad.
    async fn dad(&self, id: DadId) -> Result<Option<Dad>, DadRepositoryError>;
}
