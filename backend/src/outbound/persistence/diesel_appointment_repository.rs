//! PostgreSQL-backed `AppointmentRepository`.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewAppointmentRow;
use super::pool::DbPool;
use super::schema::client_has_dad;
use crate::domain::Appointment;
use crate::domain::ports::{AppointmentRepository, AppointmentRepositoryError};

/// Diesel adapter for the `client_has_dad` table.
#[derive(Clone)]
pub struct DieselAppointmentRepository {
    pool: DbPool,
}

impl DieselAppointmentRepository {
    /// Wrap a pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for DieselAppointmentRepository {
    async fn set_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<(), AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(client_has_dad::table)
            .values(NewAppointmentRow::from(appointment))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
