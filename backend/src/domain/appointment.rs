//! Appointments between a client and a dad.

use chrono::NaiveDateTime;

use super::{ClientId, DadId};

const DATETIME_LOCAL_MINUTES: &str = "%Y-%m-%dT%H:%M";
const DATETIME_LOCAL_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// A booked time slot.
///
/// Start and end are stored as submitted; no ordering or overlap check is
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// Booking client.
    pub client_id: ClientId,
    /// Booked dad.
    pub dad_id: DadId,
    /// Slot start, local time.
    pub start: NaiveDateTime,
    /// Slot end, local time.
    pub end: NaiveDateTime,
}

/// Parse the value of an HTML `datetime-local` input.
///
/// Browsers send `YYYY-MM-DDTHH:MM`, with seconds when the input's `step`
/// allows them.
///
/// # Examples
/// ```
/// use dad_rental::domain::parse_datetime_local;
///
/// let start = parse_datetime_local("2024-05-01T10:30").expect("valid");
/// assert_eq!(start.to_string(), "2024-05-01 10:30:00");
/// assert!(parse_datetime_local("tomorrow").is_none());
/// ```
#[must_use]
pub fn parse_datetime_local(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_MINUTES)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_SECONDS))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-05-01T10:30", "2024-05-01 10:30:00")]
    #[case("2024-05-01T10:30:45", "2024-05-01 10:30:45")]
    #[case(" 2024-12-31T23:59 ", "2024-12-31 23:59:00")]
    fn parses_browser_values(#[case] raw: &str, #[case] expected: &str) {
        let parsed = parse_datetime_local(raw).expect("valid datetime-local");
        assert_eq!(parsed.to_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2024-05-01")]
    #[case("2024-13-01T10:30")]
    #[case("10:30")]
    fn rejects_other_shapes(#[case] raw: &str) {
        assert!(parse_datetime_local(raw).is_none());
    }
}
