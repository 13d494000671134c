//! PostgreSQL-backed `DadRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::DadRow;
use super::pool::DbPool;
use super::schema::dads;
use crate::domain::ports::{DadRepository, DadRepositoryError};
use crate::domain::{Dad, DadId};

/// Diesel adapter for the `dads` table.
#[derive(Clone)]
pub struct DieselDadRepository {
    pool: DbPool,
}

impl DieselDadRepository {
    /// Wrap a pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DadRepository for DieselDadRepository {
    async fn all_dads(&self) -> Result<Vec<Dad>, DadRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<DadRow> = dads::table
            .order(dads::id.asc())
            .select(DadRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Dad::from).collect())
    }

    async fn dad(&self, id: DadId) -> Result<Option<Dad>, DadRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<DadRow> = dads::table
            .find(id.get())
            .select(DadRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Dad::from))
    }
}
