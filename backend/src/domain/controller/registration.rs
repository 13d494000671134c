//! Registration form handling.

use tracing::info;

use super::{Controller, map_client_error};
use crate::domain::validator::{
    self, Rule, USERNAME_TAKEN_MESSAGE, check_confirm_password, password_complexity,
};
use crate::domain::{
    Action, ClientSession, Error, Field, FormInput, NewClient, Outcome, Page, PlainPassword,
    all_valid,
};

const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 20;
const EMAIL_MAX_LENGTH: usize = 50;

/// The six registration inputs, in display order.
struct RegistrationFields {
    username: Field,
    password: Field,
    confirm_password: Field,
    first_name: Field,
    last_name: Field,
    email: Field,
}

impl RegistrationFields {
    fn empty() -> Self {
        Self {
            username: Field::new("username"),
            password: Field::password("password"),
            confirm_password: Field::password("confirm_password"),
            first_name: Field::new("first_name"),
            last_name: Field::new("last_name"),
            email: Field::new("email"),
        }
    }

    /// Passwords keep their exact value; every other input is trimmed so
    /// the stored value is the one that was length-checked.
    fn from_form(form: &FormInput) -> Self {
        let empty = Self::empty();
        let text = |field: Field| {
            let value = form.value(field.name()).trim().to_owned();
            field.with_value(value)
        };
        let secret = |field: Field| {
            let value = form.value(field.name()).to_owned();
            field.with_value(value)
        };
        Self {
            username: text(empty.username),
            password: secret(empty.password),
            confirm_password: secret(empty.confirm_password),
            first_name: text(empty.first_name),
            last_name: text(empty.last_name),
            email: text(empty.email),
        }
    }

    fn all_valid(&self) -> bool {
        all_valid([
            &self.username,
            &self.password,
            &self.confirm_password,
            &self.first_name,
            &self.last_name,
            &self.email,
        ])
    }

    fn into_page(self) -> Page {
        Page::Registration {
            fields: vec![
                self.username,
                self.password,
                self.confirm_password,
                self.first_name,
                self.last_name,
                self.email,
            ],
        }
    }
}

pub(super) fn empty_page() -> Page {
    RegistrationFields::empty().into_page()
}

impl Controller {
    pub(super) async fn register(
        &self,
        form: &FormInput,
        session: &mut ClientSession,
    ) -> Result<Outcome, Error> {
        let mut fields = RegistrationFields::from_form(form);

        validator::validate(&mut fields.username, &[Rule::Required, Rule::default_length()]);
        if !fields.username.has_error() {
            let taken = self
                .ports
                .clients
                .client_exists(fields.username.value())
                .await
                .map_err(map_client_error)?;
            validator::apply(
                &mut fields.username,
                &Rule::Unique {
                    taken,
                    message: USERNAME_TAKEN_MESSAGE,
                },
            );
        }

        let [mixed_case, digit, symbol] = password_complexity();
        validator::validate(
            &mut fields.password,
            &[
                Rule::Required,
                Rule::length(PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH),
                mixed_case,
                digit,
                symbol,
            ],
        );
        check_confirm_password(&mut fields.confirm_password, &fields.password);

        for name in [&mut fields.first_name, &mut fields.last_name] {
            validator::validate(name, &[Rule::Required, Rule::default_length()]);
        }
        validator::validate(
            &mut fields.email,
            &[Rule::Required, Rule::length(1, EMAIL_MAX_LENGTH), Rule::Email],
        );

        if !fields.all_valid() {
            fields.password.clear_value();
            fields.confirm_password.clear_value();
            return Ok(Outcome::Render(fields.into_page()));
        }

        let password = PlainPassword::new(fields.password.value());
        let password_hash = self
            .ports
            .hasher
            .hash(&password)
            .map_err(|error| Error::internal(error.to_string()))?;
        let client = NewClient {
            username: fields.username.value().to_owned(),
            password_hash,
            first_name: fields.first_name.value().to_owned(),
            last_name: fields.last_name.value().to_owned(),
            email: fields.email.value().to_owned(),
        };
        self.ports
            .clients
            .add_client(&client)
            .await
            .map_err(map_client_error)?;

        info!(username = %client.username, "client registered");
        session.sign_in(client.username);
        Ok(Outcome::Redirect(Action::WelcomeHome))
    }
}
