//! Validation rules for form fields.
//!
//! A rule inspects one field value and either passes or names a violation.
//! Rules never run against a field that already carries an error, so for
//! each field the first failing rule decides the message the user sees.
//! [`validate`] applies a rule list as a short-circuiting fold and stops at
//! the first rule that does not pass.
//!
//! ```
//! use dad_rental::domain::validator::{validate, Rule, RuleOutcome};
//! use dad_rental::domain::Field;
//!
//! let mut username = Field::new("username");
//! let outcome = validate(&mut username, &[Rule::Required, Rule::length(1, 25)]);
//! assert_eq!(outcome, RuleOutcome::Failed);
//! assert_eq!(username.error(), Some("Required."));
//! ```

use std::ops::ControlFlow;
use std::sync::OnceLock;

use regex::Regex;

use super::Field;

/// Message attached by [`Rule::Required`].
pub const REQUIRED_MESSAGE: &str = "Required.";
/// Message attached by [`Rule::ConfirmPassword`].
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";
/// Message attached by [`Rule::Email`].
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address.";
/// Message attached when a username is already registered.
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists.";
/// Password complexity: mixed case.
pub const MIXED_CASE_MESSAGE: &str = "Must contain an uppercase and lowercase letter.";
/// Password complexity: digit.
pub const DIGIT_MESSAGE: &str = "Must contain a number.";
/// Password complexity: symbol.
pub const SYMBOL_MESSAGE: &str = "Must contain a symbol (!@#$%^&*).";

/// Default lower bound for [`Rule::ProperLength`].
pub const DEFAULT_MIN_LENGTH: usize = 1;
/// Default upper bound for [`Rule::ProperLength`].
pub const DEFAULT_MAX_LENGTH: usize = 25;

/// What happened when a rule was offered a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The field already carried an error; the rule did not run.
    Skipped,
    /// The rule ran and the value satisfied it.
    Passed,
    /// The rule ran and attached its message.
    Failed,
}

/// A single validation rule.
#[derive(Debug, Clone, Copy)]
pub enum Rule<'a> {
    /// Value must not be empty.
    Required,
    /// Trimmed character count must lie in `min..=max`.
    ProperLength { min: usize, max: usize },
    /// Value must match `pattern` somewhere; otherwise `message` is attached.
    MatchPattern {
        pattern: &'a Regex,
        message: &'a str,
    },
    /// Value must equal the companion password value.
    ConfirmPassword { password: &'a str },
    /// Value must look like `local@domain.tld`.
    Email,
    /// Value must not already be in use; `taken` is the lookup result.
    Unique { taken: bool, message: &'a str },
}

impl<'a> Rule<'a> {
    /// Length rule with explicit bounds.
    #[must_use]
    pub const fn length(min: usize, max: usize) -> Self {
        Self::ProperLength { min, max }
    }

    /// Length rule with the default `1..=25` bounds.
    #[must_use]
    pub const fn default_length() -> Self {
        Self::length(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }

    /// Pattern rule.
    #[must_use]
    pub const fn pattern(pattern: &'a Regex, message: &'a str) -> Self {
        Self::MatchPattern { pattern, message }
    }

    fn violation(&self, value: &str) -> Option<String> {
        match *self {
            Self::Required => value.is_empty().then(|| REQUIRED_MESSAGE.to_owned()),
            Self::ProperLength { min, max } => {
                let length = value.trim().chars().count();
                (length < min || length > max)
                    .then(|| format!("Must be between {min} and {max} characters."))
            }
            Self::MatchPattern { pattern, message } => {
                (!pattern.is_match(value)).then(|| message.to_owned())
            }
            Self::ConfirmPassword { password } => {
                (value != password).then(|| PASSWORD_MISMATCH_MESSAGE.to_owned())
            }
            Self::Email => (!email_regex().is_match(value)).then(|| INVALID_EMAIL_MESSAGE.to_owned()),
            Self::Unique { taken, message } => taken.then(|| message.to_owned()),
        }
    }
}

/// Offer a single rule to `field`.
pub fn apply(field: &mut Field, rule: &Rule<'_>) -> RuleOutcome {
    if field.has_error() {
        return RuleOutcome::Skipped;
    }
    match rule.violation(field.value()) {
        Some(message) => {
            field.reject(message);
            RuleOutcome::Failed
        }
        None => RuleOutcome::Passed,
    }
}

/// Apply `rules` in order, stopping at the first rule that does not pass.
///
/// Returns [`RuleOutcome::Passed`] only when every rule ran and passed.
pub fn validate(field: &mut Field, rules: &[Rule<'_>]) -> RuleOutcome {
    let flow = rules.iter().try_for_each(|rule| match apply(field, rule) {
        RuleOutcome::Passed => ControlFlow::Continue(()),
        stopped => ControlFlow::Break(stopped),
    });
    match flow {
        ControlFlow::Break(outcome) => outcome,
        ControlFlow::Continue(()) if field.has_error() => RuleOutcome::Skipped,
        ControlFlow::Continue(()) => RuleOutcome::Passed,
    }
}

/// Fail when the value is empty.
pub fn required(field: &mut Field) -> RuleOutcome {
    apply(field, &Rule::Required)
}

/// Fail when the trimmed length is outside `min..=max`.
pub fn proper_length(field: &mut Field, min: usize, max: usize) -> RuleOutcome {
    apply(field, &Rule::length(min, max))
}

/// Fail with `message` when the value does not match `pattern`.
pub fn match_pattern(field: &mut Field, pattern: &Regex, message: &str) -> RuleOutcome {
    apply(field, &Rule::pattern(pattern, message))
}

/// Fail `confirm` when its value differs from `password`.
pub fn check_confirm_password(confirm: &mut Field, password: &Field) -> RuleOutcome {
    apply(
        confirm,
        &Rule::ConfirmPassword {
            password: password.value(),
        },
    )
}

/// Fail when the value is not a plausible email address.
pub fn check_email(field: &mut Field) -> RuleOutcome {
    apply(field, &Rule::Email)
}

fn compile(slot: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    slot.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("validator regex {pattern} failed to compile: {error}"))
    })
}

/// At least one uppercase and one lowercase letter, in either order.
pub fn mixed_case_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"[[:upper:]].*[[:lower:]]|[[:lower:]].*[[:upper:]]")
}

/// At least one ASCII digit.
pub fn digit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"[[:digit:]]")
}

/// At least one of `!@#$%^&*`.
pub fn symbol_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"[!@#$%^&*]")
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"^[^\s@]+@[^\s@]+\.[^\s@.]+$")
}

/// The three password complexity checks, in the order they are applied.
#[must_use]
pub fn password_complexity() -> [Rule<'static>; 3] {
    [
        Rule::pattern(mixed_case_regex(), MIXED_CASE_MESSAGE),
        Rule::pattern(digit_regex(), DIGIT_MESSAGE),
        Rule::pattern(symbol_regex(), SYMBOL_MESSAGE),
    ]
}
