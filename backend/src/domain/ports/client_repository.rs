//! Port for client records and their bookings.

use async_trait::async_trait;

use crate::domain::{ClientId, Dad, NewClient};

use super::define_port_error;

define_port_error! {
    /// Errors raised by client repository adapters.
    pub enum ClientRepositoryError {
        /// Storage could not be reached.
        Connection { message: String } => "client repository connection failed: {message}",
        /// A query or insert failed.
        Query { message: String } => "client repository query failed: {message}",
    }
}

/// Reads and writes client records.
///
/// Lookups are by username, which storage keeps unique.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Whether `username` is already registered.
    async fn client_exists(&self, username: &str) -> Result<bool, ClientRepositoryError>;

    /// Store a new client.
    async fn add_client(&self, client: &NewClient) -> Result<(), ClientRepositoryError>;

    /// Stored password hash for `username`.
    async fn find_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<String>, ClientRepositoryError>;

    /// Identifier of the client registered as `username`.
    async fn id_via_username(
        &self,
        username: &str,
    ) -> Result<Option<ClientId>, ClientRepositoryError>;

    /// First name of the client registered as `username`.
    async fn first_name_via_username(
        &self,
        username: &str,
    ) -> Result<Option<String>, ClientRepositoryError>;

    /// Dads booked by `client_id`, one entry per appointment.
    async fn client_dads(&self, client_id: ClientId) -> Result<Vec<Dad>, ClientRepositoryError>;
}
