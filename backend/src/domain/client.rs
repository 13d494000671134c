//! Registered clients.

use std::fmt;

use zeroize::Zeroizing;

/// Storage identifier of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(i32);

impl ClientId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated registration ready for storage.
///
/// The password is already hashed; the plain text never reaches a gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    /// Unique login name.
    pub username: String,
    /// Output of the configured password hasher.
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact address.
    pub email: String,
}

/// Plain-text password held only as long as a hash or verification needs it.
///
/// The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(Zeroizing<String>);

impl PlainPassword {
    /// Take ownership of a submitted password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(Zeroizing::new(password.into()))
    }

    /// Borrow the plain text.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_password_debug_is_redacted() {
        let password = PlainPassword::new("Abcd123!");
        assert_eq!(format!("{password:?}"), "PlainPassword(..)");
        assert_eq!(password.expose(), "Abcd123!");
    }
}
