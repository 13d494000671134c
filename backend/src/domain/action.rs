//! The closed set of user-facing actions.
//!
//! Every request names an action through its `action` parameter. Unknown or
//! missing names fall back to [`Action::Home`], so parsing never fails.

use std::fmt;

/// A user-facing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// Landing page.
    #[default]
    Home,
    /// Landing page after a successful login.
    ReturningHome,
    /// Landing page after a successful registration.
    WelcomeHome,
    /// Landing page after logging out.
    LogoutHome,
    /// Empty registration form.
    ShowRegistration,
    /// Registration form submission.
    Register,
    /// Empty login form.
    ShowLogin,
    /// Login form submission.
    Login,
    /// End the session.
    Logout,
    /// List every dad.
    ShowDadSelection,
    /// Appointment form for one dad.
    RentThisDad,
    /// Appointment form submission.
    SetAppointment,
    /// Dads booked by the current client.
    MyDads,
    /// Page shown when a guarded action is attempted without a session.
    Unauthorized,
    /// Page shown when an anonymous-only action is attempted with a session.
    AuthorizedError,
}

impl Action {
    /// Every action, in dispatch-table order.
    pub const ALL: [Self; 15] = [
        Self::Home,
        Self::ReturningHome,
        Self::WelcomeHome,
        Self::LogoutHome,
        Self::ShowRegistration,
        Self::Register,
        Self::ShowLogin,
        Self::Login,
        Self::Logout,
        Self::ShowDadSelection,
        Self::RentThisDad,
        Self::SetAppointment,
        Self::MyDads,
        Self::Unauthorized,
        Self::AuthorizedError,
    ];

    /// Resolve an action parameter, defaulting to [`Action::Home`].
    ///
    /// # Examples
    /// ```
    /// use dad_rental::domain::Action;
    ///
    /// assert_eq!(Action::parse(Some("My Dads")), Action::MyDads);
    /// assert_eq!(Action::parse(Some("Dance")), Action::Home);
    /// assert_eq!(Action::parse(None), Action::Home);
    /// ```
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|name| Self::ALL.into_iter().find(|action| action.as_str() == name))
            .unwrap_or_default()
    }

    /// Wire name carried in the `action` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::ReturningHome => "Returning Home",
            Self::WelcomeHome => "Welcome Home",
            Self::LogoutHome => "Logout Home",
            Self::ShowRegistration => "Show Registration",
            Self::Register => "Register",
            Self::ShowLogin => "Show Login",
            Self::Login => "Login",
            Self::Logout => "Logout",
            Self::ShowDadSelection => "Show Dad Selection",
            Self::RentThisDad => "Rent This Dad",
            Self::SetAppointment => "Set Appointment",
            Self::MyDads => "My Dads",
            Self::Unauthorized => "Unauthorized",
            Self::AuthorizedError => "Authorized Error",
        }
    }

    /// Whether the action needs an authenticated session.
    #[must_use]
    pub const fn requires_session(self) -> bool {
        matches!(self, Self::RentThisDad | Self::SetAppointment | Self::MyDads)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_wire_name_parses_back() {
        for action in Action::ALL {
            assert_eq!(Action::parse(Some(action.as_str())), action);
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("home"))]
    #[case(Some("Rent this dad"))]
    #[case(Some("DROP TABLE clients"))]
    fn unknown_names_default_to_home(#[case] raw: Option<&str>) {
        assert_eq!(Action::parse(raw), Action::Home);
    }

    #[rstest]
    fn only_dad_actions_are_guarded() {
        let guarded: Vec<_> = Action::ALL
            .into_iter()
            .filter(|action| action.requires_session())
            .collect();
        assert_eq!(
            guarded,
            vec![Action::RentThisDad, Action::SetAppointment, Action::MyDads]
        );
    }
}
