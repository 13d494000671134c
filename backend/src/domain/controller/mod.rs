//! Action dispatch.
//!
//! [`Controller::invoke`] maps one [`Action`] onto its handler. Handlers
//! build fields from the submitted form, run validation, call the ports and
//! return an [`Outcome`]. Infrastructure failures propagate as [`Error`];
//! everything a user can fix is carried on the page instead.

mod appointments;
mod login;
mod registration;


pub use appointments::INVALID_DATETIME_MESSAGE;
pub use login::LOGIN_ERROR_MESSAGE;

use std::sync::Arc;

use tracing::{debug, info};

use super::ports::{
    AppointmentRepository, AppointmentRepositoryError, ClientRepository, ClientRepositoryError,
    DadRepository, DadRepositoryError, PasswordHasher,
};
use super::{Action, ClientSession, Error, FormInput, HomeVariant, Outcome, Page};

/// Shown on the home page when a signed-in username has no client record.
pub const ACCOUNT_PROBLEM_MESSAGE: &str = "Something is wrong with your account?";

/// Ports the controller talks to.
#[derive(Clone)]
pub struct ControllerPorts {
    /// Client records.
    pub clients: Arc<dyn ClientRepository>,
    /// Dad catalogue.
    pub dads: Arc<dyn DadRepository>,
    /// Appointment storage.
    pub appointments: Arc<dyn AppointmentRepository>,
    /// Password hashing.
    pub hasher: Arc<dyn PasswordHasher>,
}

/// Actions that only run for a signed-in client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardedAction {
    RentThisDad,
    SetAppointment,
    MyDads,
}

/// Request dispatcher. Cheap to clone.
#[derive(Clone)]
pub struct Controller {
    ports: ControllerPorts,
}

impl Controller {
    /// Build a controller over `ports`.
    #[must_use]
    pub fn new(ports: ControllerPorts) -> Self {
        Self { ports }
    }

    /// Run `action` against `form`, reading and updating `session`.
    ///
    /// # Errors
    /// Returns [`Error`] when a port fails or a submitted dad id does not
    /// resolve to a dad.
    pub async fn invoke(
        &self,
        action: Action,
        form: &FormInput,
        session: &mut ClientSession,
    ) -> Result<Outcome, Error> {
        debug!(
            action = %action,
            requires_session = action.requires_session(),
            signed_in = session.is_valid_user(),
            "dispatching action"
        );
        match action {
            Action::Home => self.home(HomeVariant::Default, session).await,
            Action::ReturningHome => self.home(HomeVariant::Returning, session).await,
            Action::WelcomeHome => self.home(HomeVariant::Welcome, session).await,
            Action::LogoutHome => self.home(HomeVariant::Logout, session).await,
            Action::ShowRegistration => Ok(guest_only(session)
                .unwrap_or_else(|| Outcome::Render(registration::empty_page()))),
            Action::Register => match guest_only(session) {
                Some(redirect) => Ok(redirect),
                None => self.register(form, session).await,
            },
            Action::ShowLogin => {
                Ok(guest_only(session).unwrap_or_else(|| Outcome::Render(login::empty_page())))
            }
            Action::Login => match guest_only(session) {
                Some(redirect) => Ok(redirect),
                None => self.login(form, session).await,
            },
            Action::Logout => Ok(logout(session)),
            Action::ShowDadSelection => self.dad_selection().await,
            Action::RentThisDad => self.guarded(GuardedAction::RentThisDad, form, session).await,
            Action::SetAppointment => {
                self.guarded(GuardedAction::SetAppointment, form, session)
                    .await
            }
            Action::MyDads => self.guarded(GuardedAction::MyDads, form, session).await,
            Action::Unauthorized => Ok(Outcome::Render(Page::Unauthorized)),
            Action::AuthorizedError => Ok(Outcome::Render(Page::AuthorizedError)),
        }
    }

    async fn guarded(
        &self,
        action: GuardedAction,
        form: &FormInput,
        session: &ClientSession,
    ) -> Result<Outcome, Error> {
        let Some(username) = session.authenticated_username() else {
            info!(?action, "guarded action requested without a session");
            return Ok(Outcome::Redirect(Action::Unauthorized));
        };
        match action {
            GuardedAction::RentThisDad => self.rent_this_dad(form).await,
            GuardedAction::SetAppointment => self.set_appointment(form, username).await,
            GuardedAction::MyDads => self.rented_dads(username).await,
        }
    }

    async fn home(&self, variant: HomeVariant, session: &ClientSession) -> Result<Outcome, Error> {
        let first_name = match session.authenticated_username() {
            Some(username) => self
                .ports
                .clients
                .first_name_via_username(username)
                .await
                .map_err(map_client_error)?,
            None => None,
        };
        Ok(Outcome::Render(Page::Home {
            variant,
            first_name,
            notice: None,
        }))
    }

    async fn dad_selection(&self) -> Result<Outcome, Error> {
        let dads = self.ports.dads.all_dads().await.map_err(map_dad_error)?;
        Ok(Outcome::Render(Page::DadSelection { dads }))
    }
}

/// Redirect signed-in clients away from anonymous-only actions.
fn guest_only(session: &ClientSession) -> Option<Outcome> {
    session
        .is_valid_user()
        .then_some(Outcome::Redirect(Action::AuthorizedError))
}

fn logout(session: &mut ClientSession) -> Outcome {
    if let Some(username) = session.username() {
        info!(%username, "client logged out");
    }
    session.clear();
    Outcome::Redirect(Action::LogoutHome)
}

fn account_problem_page() -> Page {
    Page::Home {
        variant: HomeVariant::Default,
        first_name: None,
        notice: Some(ACCOUNT_PROBLEM_MESSAGE.to_owned()),
    }
}

fn map_client_error(error: ClientRepositoryError) -> Error {
    debug!(variant = error.variant_name(), %error, "client repository failed");
    match error {
        ClientRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("client repository unavailable: {message}"))
        }
        ClientRepositoryError::Query { message } => {
            Error::internal(format!("client repository error: {message}"))
        }
    }
}

fn map_dad_error(error: DadRepositoryError) -> Error {
    debug!(variant = error.variant_name(), %error, "dad repository failed");
    match error {
        DadRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("dad repository unavailable: {message}"))
        }
        DadRepositoryError::Query { message } => {
            Error::internal(format!("dad repository error: {message}"))
        }
    }
}

fn map_appointment_error(error: AppointmentRepositoryError) -> Error {
    debug!(variant = error.variant_name(), %error, "appointment repository failed");
    match error {
        AppointmentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("appointment repository unavailable: {message}"))
        }
        AppointmentRepositoryError::Query { message } => {
            Error::internal(format!("appointment repository error: {message}"))
        }
    }
}
