//! Login form handling.

use tracing::{info, warn};

use super::{Controller, map_client_error};
use crate::domain::validator::{self, Rule};
use crate::domain::{
    Action, ClientSession, Error, Field, FormInput, Outcome, Page, PlainPassword, all_valid,
};

/// Form-level message shown when the credentials do not match.
pub const LOGIN_ERROR_MESSAGE: &str = "Username or password was not recognized";

pub(super) fn empty_page() -> Page {
    Page::Login {
        fields: vec![Field::new("username"), Field::password("password")],
        login_error: None,
    }
}

impl Controller {
    pub(super) async fn login(
        &self,
        form: &FormInput,
        session: &mut ClientSession,
    ) -> Result<Outcome, Error> {
        let mut username = Field::new("username").with_value(form.value("username").trim());
        let mut password = Field::password("password").with_value(form.value("password"));
        validator::validate(&mut username, &[Rule::Required]);
        validator::validate(&mut password, &[Rule::Required]);

        let credentials_match = self
            .is_valid_login(username.value(), &PlainPassword::new(password.value()))
            .await?;

        if credentials_match && all_valid([&username, &password]) {
            info!(username = %username.value(), "client logged in");
            session.sign_in(username.value());
            return Ok(Outcome::Redirect(Action::ReturningHome));
        }

        info!(username = %username.value(), "login rejected");
        password.clear_value();
        Ok(Outcome::Render(Page::Login {
            fields: vec![username, password],
            login_error: (!credentials_match).then(|| LOGIN_ERROR_MESSAGE.to_owned()),
        }))
    }

    /// Whether `password` matches the stored hash for `username`.
    async fn is_valid_login(&self, username: &str, password: &PlainPassword) -> Result<bool, Error> {
        let Some(stored) = self
            .ports
            .clients
            .find_password_hash(username)
            .await
            .map_err(map_client_error)?
        else {
            return Ok(false);
        };
        Ok(self
            .ports
            .hasher
            .verify(password, &stored)
            .unwrap_or_else(|error| {
                warn!(%username, %error, "stored password hash rejected");
                false
            }))
    }
}
