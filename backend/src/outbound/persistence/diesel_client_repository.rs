//! PostgreSQL-backed `ClientRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DadRow, NewClientRow};
use super::pool::DbPool;
use super::schema::{client_has_dad, clients, dads};
use crate::domain::ports::{ClientRepository, ClientRepositoryError};
use crate::domain::{ClientId, Dad, NewClient};

/// Diesel adapter for the `clients` table and the bookings joined onto it.
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    /// Wrap a pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn client_exists(&self, username: &str) -> Result<bool, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            clients::table.filter(clients::username.eq(username)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn add_client(&self, client: &NewClient) -> Result<(), ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(clients::table)
            .values(NewClientRow::from(client))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<String>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        clients::table
            .filter(clients::username.eq(username))
            .select(clients::password_hash)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }

    async fn id_via_username(
        &self,
        username: &str,
    ) -> Result<Option<ClientId>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id: Option<i32> = clients::table
            .filter(clients::username.eq(username))
            .select(clients::id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(id.map(ClientId::new))
    }

    async fn first_name_via_username(
        &self,
        username: &str,
    ) -> Result<Option<String>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        clients::table
            .filter(clients::username.eq(username))
            .select(clients::first_name)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }

    async fn client_dads(&self, client_id: ClientId) -> Result<Vec<Dad>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<DadRow> = client_has_dad::table
            .inner_join(dads::table)
            .filter(client_has_dad::client_id.eq(client_id.get()))
            .order((client_has_dad::start_time.asc(), client_has_dad::id.asc()))
            .select(DadRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Dad::from).collect())
    }
}
