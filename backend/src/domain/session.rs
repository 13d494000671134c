//! Per-request view of the client's session.
//!
//! The HTTP adapter loads this from the session cookie before dispatching and
//! writes it back afterwards, so the controller never touches framework
//! session types.

/// Authentication state carried between requests.
///
/// # Examples
/// ```
/// use dad_rental::domain::ClientSession;
///
/// let mut session = ClientSession::default();
/// assert!(!session.is_valid_user());
///
/// session.sign_in("bob");
/// assert_eq!(session.username(), Some("bob"));
///
/// session.clear();
/// assert!(session.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSession {
    is_valid_user: bool,
    username: Option<String>,
}

impl ClientSession {
    /// Rebuild a session from stored values.
    #[must_use]
    pub fn from_parts(is_valid_user: bool, username: Option<String>) -> Self {
        Self {
            is_valid_user,
            username,
        }
    }

    /// Whether the client has logged in or registered.
    #[must_use]
    pub fn is_valid_user(&self) -> bool {
        self.is_valid_user
    }

    /// Username recorded at sign-in.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Username of an authenticated client; `None` for anonymous sessions.
    #[must_use]
    pub fn authenticated_username(&self) -> Option<&str> {
        self.username().filter(|_| self.is_valid_user)
    }

    /// Mark the session authenticated as `username`.
    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.is_valid_user = true;
        self.username = Some(username.into());
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn anonymous_session_has_no_username() {
        let session = ClientSession::default();
        assert!(session.is_empty());
        assert_eq!(session.authenticated_username(), None);
    }

    #[rstest]
    fn username_without_flag_is_not_authenticated() {
        let session = ClientSession::from_parts(false, Some("bob".to_owned()));
        assert_eq!(session.username(), Some("bob"));
        assert_eq!(session.authenticated_username(), None);
        assert!(!session.is_empty());
    }

    #[rstest]
    fn sign_in_then_clear() {
        let mut session = ClientSession::default();
        session.sign_in("bob");
        assert_eq!(session.authenticated_username(), Some("bob"));
        session.clear();
        assert!(session.is_empty());
    }
}
