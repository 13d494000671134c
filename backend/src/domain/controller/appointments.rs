//! Dad booking: the appointment form, its submission and the rented list.

use chrono::NaiveDateTime;
use tracing::info;

use super::{
    Controller, account_problem_page, map_appointment_error, map_client_error, map_dad_error,
};
use crate::domain::validator::{self, Rule};
use crate::domain::{
    Appointment, ClientId, Dad, DadId, Error, Field, FormInput, Outcome, Page, all_valid,
    parse_datetime_local,
};

/// Attached to a time field whose value is not a `datetime-local` string.
pub const INVALID_DATETIME_MESSAGE: &str = "Must be a valid date and time.";

fn parse_time(field: &mut Field) -> Option<NaiveDateTime> {
    if field.has_error() {
        return None;
    }
    let parsed = parse_datetime_local(field.value());
    if parsed.is_none() {
        field.reject(INVALID_DATETIME_MESSAGE);
    }
    parsed
}

fn submitted_dad_id(form: &FormInput) -> Result<DadId, Error> {
    form.value("dad_id")
        .parse()
        .map_err(|error| Error::not_found(format!("no such dad: {error}")))
}

impl Controller {
    pub(super) async fn rent_this_dad(&self, form: &FormInput) -> Result<Outcome, Error> {
        let dad = self.load_dad(submitted_dad_id(form)?).await?;
        Ok(Outcome::Render(Page::Appointment {
            fields: vec![Field::date_time("start_time"), Field::date_time("end_time")],
            dad,
        }))
    }

    pub(super) async fn set_appointment(
        &self,
        form: &FormInput,
        username: &str,
    ) -> Result<Outcome, Error> {
        let dad = self.load_dad(submitted_dad_id(form)?).await?;
        let dad_id = dad.id;
        let mut start = Field::date_time("start_time").with_value(form.value("start_time"));
        let mut end = Field::date_time("end_time").with_value(form.value("end_time"));
        validator::validate(&mut start, &[Rule::Required]);
        validator::validate(&mut end, &[Rule::Required]);

        let times = match (parse_time(&mut start), parse_time(&mut end)) {
            (Some(start_at), Some(end_at)) if all_valid([&start, &end]) => Some((start_at, end_at)),
            _ => None,
        };
        let Some((start_at, end_at)) = times else {
            return Ok(Outcome::Render(Page::Appointment {
                fields: vec![start, end],
                dad,
            }));
        };

        let Some(client_id) = self.client_id(username).await? else {
            return Ok(Outcome::Render(account_problem_page()));
        };
        let appointment = Appointment {
            client_id,
            dad_id,
            start: start_at,
            end: end_at,
        };
        self.ports
            .appointments
            .set_appointment(&appointment)
            .await
            .map_err(map_appointment_error)?;
        info!(%username, client_id = %client_id, dad_id = %dad_id, "appointment booked");

        self.rented_dads_for(client_id).await
    }

    pub(super) async fn rented_dads(&self, username: &str) -> Result<Outcome, Error> {
        match self.client_id(username).await? {
            Some(client_id) => self.rented_dads_for(client_id).await,
            None => Ok(Outcome::Render(account_problem_page())),
        }
    }

    async fn rented_dads_for(&self, client_id: ClientId) -> Result<Outcome, Error> {
        let dads = self
            .ports
            .clients
            .client_dads(client_id)
            .await
            .map_err(map_client_error)?;
        Ok(Outcome::Render(Page::RentedDads { dads }))
    }

    async fn client_id(&self, username: &str) -> Result<Option<ClientId>, Error> {
        self.ports
            .clients
            .id_via_username(username)
            .await
            .map_err(map_client_error)
    }

    async fn load_dad(&self, id: DadId) -> Result<Dad, Error> {
        self.ports
            .dads
            .dad(id)
            .await
            .map_err(map_dad_error)?
            .ok_or_else(|| Error::not_found(format!("no such dad: {id}")))
    }
}
