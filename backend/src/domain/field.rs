//! Form fields: one submitted value plus at most one validation error.
//!
//! Fields are built per request from raw form input, run through the
//! validator rules, and then either discarded after a redirect or handed to
//! the page renderer so the form can be redisplayed with its errors.

use std::fmt;

/// Rendering hint for the HTML input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text input.
    Text,
    /// Masked password input.
    Password,
    /// Browser date and time picker.
    DateTimeLocal,
}

impl FieldKind {
    /// HTML `type` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::DateTimeLocal => "datetime-local",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single form input.
///
/// ## Invariants
/// - A new field carries no error.
/// - Once an error is attached it is never replaced; the first failing rule
///   wins.
///
/// # Examples
/// ```
/// use dad_rental::domain::{Field, FieldKind};
///
/// let field = Field::password("password").with_value("hunter2");
/// assert_eq!(field.kind(), FieldKind::Password);
/// assert!(!field.has_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    kind: FieldKind,
    value: String,
    error: Option<String>,
}

impl Field {
    /// Text field with an empty value.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self::with_kind(name, FieldKind::Text)
    }

    /// Password field with an empty value.
    #[must_use]
    pub fn password(name: &'static str) -> Self {
        Self::with_kind(name, FieldKind::Password)
    }

    /// Date-time field with an empty value.
    #[must_use]
    pub fn date_time(name: &'static str) -> Self {
        Self::with_kind(name, FieldKind::DateTimeLocal)
    }

    /// Field of an explicit kind with an empty value.
    #[must_use]
    pub fn with_kind(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            value: String::new(),
            error: None,
        }
    }

    /// Replace the raw value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Key used in form bodies and templates.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rendering hint.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Raw submitted value; empty when nothing was submitted.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Attached validation message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    /// Whether a non-empty error is attached.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Drop the value so it is never echoed back to the browser.
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    /// Attach `message` unless an error is already present.
    ///
    /// Returns `true` when the message was attached.
    pub(crate) fn reject(&mut self, message: impl Into<String>) -> bool {
        if self.has_error() {
            return false;
        }
        self.error = Some(message.into());
        true
    }
}

/// `true` when no field in `fields` carries an error.
///
/// Vacuously `true` for an empty sequence.
///
/// # Examples
/// ```
/// use dad_rental::domain::{all_valid, Field};
///
/// assert!(all_valid(&[] as &[Field]));
/// assert!(all_valid(&[Field::new("username").with_value("bob")]));
/// ```
pub fn all_valid<'a, I>(fields: I) -> bool
where
    I: IntoIterator<Item = &'a Field>,
{
    fields.into_iter().all(|field| !field.has_error())
}
