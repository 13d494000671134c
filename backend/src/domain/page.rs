//! What a handler produces: a redirect or a page to render.
//!
//! Pages are plain data. The HTTP adapter turns them into HTML, so the
//! controller can be exercised without a template engine.

use super::{Action, Dad, Field};

/// Which greeting the home page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeVariant {
    /// Plain landing page.
    #[default]
    Default,
    /// After a successful login.
    Returning,
    /// After a successful registration.
    Welcome,
    /// After logging out.
    Logout,
}

/// A renderable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Landing page.
    Home {
        /// Greeting variant.
        variant: HomeVariant,
        /// First name of the signed-in client, when known.
        first_name: Option<String>,
        /// Extra message shown above the greeting.
        notice: Option<String>,
    },
    /// Registration form.
    Registration {
        /// Username, password, confirm password, names and email, in order.
        fields: Vec<Field>,
    },
    /// Login form.
    Login {
        /// Username and password.
        fields: Vec<Field>,
        /// Form-level credential error.
        login_error: Option<String>,
    },
    /// Every rentable dad.
    DadSelection {
        /// Dads in storage order.
        dads: Vec<Dad>,
    },
    /// Appointment form for one dad.
    Appointment {
        /// Start and end time.
        fields: Vec<Field>,
        /// The dad being booked; its id is echoed as a hidden input.
        dad: Dad,
    },
    /// Dads booked by the signed-in client.
    RentedDads {
        /// Booked dads, one entry per appointment.
        dads: Vec<Dad>,
    },
    /// A guarded action was requested without a session.
    Unauthorized,
    /// An anonymous-only action was requested with a session.
    AuthorizedError,
}

impl Page {
    /// Document title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home { .. } => "Rent-a-Dad",
            Self::Registration { .. } => "Register",
            Self::Login { .. } => "Log in",
            Self::DadSelection { .. } => "Choose a dad",
            Self::Appointment { .. } => "Book an appointment",
            Self::RentedDads { .. } => "My dads",
            Self::Unauthorized => "Not signed in",
            Self::AuthorizedError => "Already signed in",
        }
    }

    /// Look up a field by name on form pages.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        match self {
            Self::Registration { fields }
            | Self::Login { fields, .. }
            | Self::Appointment { fields, .. } => {
                fields.iter().find(|field| field.name() == name)
            }
            _ => None,
        }
    }
}

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Send the browser to another action.
    Redirect(Action),
    /// Render a page in place.
    Render(Page),
}

impl Outcome {
    /// Target action when this is a redirect.
    #[must_use]
    pub fn redirect_target(&self) -> Option<Action> {
        match self {
            Self::Redirect(action) => Some(*action),
            Self::Render(_) => None,
        }
    }

    /// Rendered page when this is not a redirect.
    #[must_use]
    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::Render(page) => Some(page),
            Self::Redirect(_) => None,
        }
    }
}
