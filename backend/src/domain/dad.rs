//! Rentable dads.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Storage identifier of a dad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DadId(i32);

impl DadId {
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

impl fmt::Display for DadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a submitted `dad_id` is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid dad id '{value}': {source}")]
pub struct DadIdError {
    value: String,
    #[source]
    source: ParseIntError,
}

impl FromStr for DadId {
    type Err = DadIdError;

    /// Parse a form value such as `"7"`.
    ///
    /// # Examples
    /// ```
    /// use dad_rental::domain::DadId;
    ///
    /// assert_eq!(" 7 ".parse::<DadId>().expect("id").get(), 7);
    /// assert!("seven".parse::<DadId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self).map_err(|source| DadIdError {
            value: s.to_owned(),
            source,
        })
    }
}

/// A dad available for rent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dad {
    /// Storage identifier.
    pub id: DadId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Short pitch shown on the selection page.
    pub description: String,
    /// Price per hour in cents.
    pub hourly_rate_cents: i64,
    /// Relative path of the portrait image.
    pub image_path: String,
}

impl Dad {
    /// `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Hourly rate formatted as dollars, e.g. `$25.00`.
    #[must_use]
    pub fn hourly_rate(&self) -> String {
        let cents = self.hourly_rate_cents;
        format!("${}.{:02}", cents / 100, (cents % 100).abs())
    }
}
