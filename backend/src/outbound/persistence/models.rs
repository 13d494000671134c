//! Diesel row structs. Never exposed outside the persistence adapter.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{client_has_dad, clients, dads};
use crate::domain::{Appointment, Dad, DadId, NewClient};

/// Insert shape for `clients`.
#[derive(Debug, Insertable)]
#[diesel(table_name = clients)]
pub(crate) struct NewClientRow<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a NewClient> for NewClientRow<'a> {
    fn from(client: &'a NewClient) -> Self {
        Self {
            username: &client.username,
            password_hash: &client.password_hash,
            first_name: &client.first_name,
            last_name: &client.last_name,
            email: &client.email,
        }
    }
}

/// Read shape for `dads`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = dads)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DadRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub hourly_rate_cents: i64,
    pub image_path: String,
}

impl From<DadRow> for Dad {
    fn from(row: DadRow) -> Self {
        Self {
            id: DadId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            description: row.description,
            hourly_rate_cents: row.hourly_rate_cents,
            image_path: row.image_path,
        }
    }
}

/// Insert shape for `client_has_dad`.
#[derive(Debug, Insertable)]
#[diesel(table_name = client_has_dad)]
pub(crate) struct NewAppointmentRow {
    pub client_id: i32,
    pub dad_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl From<&Appointment> for NewAppointmentRow {
    fn from(appointment: &Appointment) -> Self {
        Self {
            client_id: appointment.client_id.get(),
            dad_id: appointment.dad_id.get(),
            start_time: appointment.start,
            end_time: appointment.end,
        }
    }
}
