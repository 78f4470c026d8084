//! Booking lifecycle rules: status machine, submission validation, pricing.
//!
//! Bookings arrive through two paths -- the full package-booking form and the
//! quick-inquiry widget -- and then move through a small set of statuses
//! driven by admin actions. The transition table lives here so the API layer
//! enforces it server-side instead of trusting the caller.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for every newly submitted booking.
pub const STATUS_PENDING: &str = "pending";
/// An admin has confirmed the booking.
pub const STATUS_CONFIRMED: &str = "confirmed";
/// The booking was cancelled before or after confirmation. Terminal.
pub const STATUS_CANCELLED: &str = "cancelled";
/// The tour took place. Terminal.
pub const STATUS_COMPLETED: &str = "completed";

/// All valid booking statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_CONFIRMED,
    STATUS_CANCELLED,
    STATUS_COMPLETED,
];

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from_status` may transition to.
///
/// Transition rules:
/// - `pending`   -> `confirmed`, `cancelled`
/// - `confirmed` -> `completed`, `cancelled`
/// - `cancelled` -> (terminal)
/// - `completed` -> (terminal)
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_CONFIRMED, STATUS_CANCELLED],
        STATUS_CONFIRMED => &[STATUS_COMPLETED, STATUS_CANCELLED],
        _ => &[],
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    let allowed = valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition booking from '{}' to '{}'. Allowed transitions: {:?}",
            current, next, allowed
        )))
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid booking status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

// ---------------------------------------------------------------------------
// Phone validation
// ---------------------------------------------------------------------------

/// Minimum digit count for a quick-inquiry phone number.
pub const MIN_PHONE_DIGITS: usize = 9;
/// Maximum digit count for a quick-inquiry phone number.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Normalize a phone number to its digits and enforce the digit-count rule.
///
/// Strips every non-digit character (spaces, dashes, parentheses, a leading
/// `+`), then requires between [`MIN_PHONE_DIGITS`] and [`MAX_PHONE_DIGITS`]
/// digits. Returns the digit string that is persisted.
///
/// Only the quick-inquiry path applies this rule; the package-booking form
/// stores its phone field verbatim.
pub fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < MIN_PHONE_DIGITS || digits.len() > MAX_PHONE_DIGITS {
        return Err(CoreError::Validation(format!(
            "Phone number must contain {} to {} digits (got {})",
            MIN_PHONE_DIGITS,
            MAX_PHONE_DIGITS,
            digits.len()
        )));
    }
    Ok(digits)
}

// ---------------------------------------------------------------------------
// Guest selection
// ---------------------------------------------------------------------------

/// Highest value offered by the bounded guest selector.
pub const MAX_SELECTABLE_GUESTS: i64 = 10;

/// Selector label meaning "ten or more guests".
pub const OPEN_ENDED_GUESTS_LABEL: &str = "10+";

/// Guest count as submitted by the package-booking form.
///
/// The form offers a bounded 1-10 selector plus a `"10+"` escape value, so
/// the JSON field arrives either as a number or as that label.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GuestSelection {
    Count(i64),
    Label(String),
}

impl GuestSelection {
    /// Resolve the selection to the guest count used for pricing and storage.
    ///
    /// Numeric selections must lie in `1..=10`; the `"10+"` label resolves to
    /// exactly [`MAX_SELECTABLE_GUESTS`] (open-ended parties are priced and
    /// recorded as ten).
    pub fn guest_count(&self) -> Result<i64, CoreError> {
        match self {
            GuestSelection::Count(n) => {
                if (1..=MAX_SELECTABLE_GUESTS).contains(n) {
                    Ok(*n)
                } else {
                    Err(CoreError::Validation(format!(
                        "Guest count must be between 1 and {MAX_SELECTABLE_GUESTS}, or '{OPEN_ENDED_GUESTS_LABEL}'"
                    )))
                }
            }
            GuestSelection::Label(label) => {
                if label == OPEN_ENDED_GUESTS_LABEL {
                    Ok(MAX_SELECTABLE_GUESTS)
                } else {
                    Err(CoreError::Validation(format!(
                        "Unknown guest selection '{label}'. Expected a number or '{OPEN_ENDED_GUESTS_LABEL}'"
                    )))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Total price for a package booking, computed once at submission time.
///
/// Never recomputed afterwards: the stored value is a snapshot, immune to
/// later catalog price edits.
pub fn compute_total_cents(price_per_person_cents: i64, guests: i64) -> i64 {
    price_per_person_cents * guests
}

// ---------------------------------------------------------------------------
// Quick-inquiry field parsing
// ---------------------------------------------------------------------------

/// Parse the quick-inquiry traveler count.
///
/// Missing, empty, or non-numeric input defaults to 1. Parsed values below 1
/// also fall back to 1.
pub fn parse_travelers(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

/// Parse the quick-inquiry start date.
///
/// A missing or empty date deliberately defaults to the current date -- the
/// widget treats "no date yet" as "as soon as possible". A present but
/// malformed date is rejected.
pub fn parse_start_date(raw: Option<&str>) -> Result<NaiveDate, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Utc::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            CoreError::Validation(format!("Invalid date '{s}'. Expected YYYY-MM-DD"))
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(validate_status("unknown").is_err());
        assert!(validate_status("").is_err());
        assert!(validate_status("PENDING").is_err());
    }

    #[test]
    fn pending_can_transition_to_confirmed_or_cancelled() {
        assert!(validate_transition(STATUS_PENDING, STATUS_CONFIRMED).is_ok());
        assert!(validate_transition(STATUS_PENDING, STATUS_CANCELLED).is_ok());
        assert!(validate_transition(STATUS_PENDING, STATUS_COMPLETED).is_err());
    }

    #[test]
    fn confirmed_can_transition_to_completed_or_cancelled() {
        assert!(validate_transition(STATUS_CONFIRMED, STATUS_COMPLETED).is_ok());
        assert!(validate_transition(STATUS_CONFIRMED, STATUS_CANCELLED).is_ok());
        assert!(validate_transition(STATUS_CONFIRMED, STATUS_PENDING).is_err());
    }

    #[test]
    fn cancelled_is_terminal() {
        for next in VALID_STATUSES {
            assert!(validate_transition(STATUS_CANCELLED, next).is_err());
        }
    }

    #[test]
    fn completed_is_terminal() {
        for next in VALID_STATUSES {
            assert!(validate_transition(STATUS_COMPLETED, next).is_err());
        }
    }

    #[test]
    fn self_transition_is_rejected() {
        assert!(validate_transition(STATUS_PENDING, STATUS_PENDING).is_err());
        assert!(validate_transition(STATUS_CONFIRMED, STATUS_CONFIRMED).is_err());
    }

    // -- normalize_phone -----------------------------------------------------

    #[test]
    fn phone_strips_formatting_characters() {
        assert_eq!(
            normalize_phone("+48 (601) 234-567").unwrap(),
            "48601234567"
        );
        assert_eq!(normalize_phone("601 234 567").unwrap(), "601234567");
    }

    #[test]
    fn phone_too_short_is_rejected() {
        assert!(normalize_phone("12345678").is_err());
        assert!(normalize_phone("").is_err());
        assert!(normalize_phone("abc").is_err());
    }

    #[test]
    fn phone_too_long_is_rejected() {
        assert!(normalize_phone("123456789012").is_err());
    }

    #[test]
    fn phone_boundary_lengths_are_accepted() {
        assert!(normalize_phone("123456789").is_ok()); // 9 digits
        assert!(normalize_phone("12345678901").is_ok()); // 11 digits
    }

    // -- GuestSelection ------------------------------------------------------

    #[test]
    fn numeric_guest_counts_in_range() {
        assert_eq!(GuestSelection::Count(1).guest_count().unwrap(), 1);
        assert_eq!(GuestSelection::Count(10).guest_count().unwrap(), 10);
    }

    #[test]
    fn numeric_guest_counts_out_of_range() {
        assert!(GuestSelection::Count(0).guest_count().is_err());
        assert!(GuestSelection::Count(11).guest_count().is_err());
        assert!(GuestSelection::Count(-3).guest_count().is_err());
    }

    #[test]
    fn open_ended_label_resolves_to_ten() {
        let sel = GuestSelection::Label(OPEN_ENDED_GUESTS_LABEL.to_string());
        assert_eq!(sel.guest_count().unwrap(), MAX_SELECTABLE_GUESTS);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(GuestSelection::Label("lots".to_string())
            .guest_count()
            .is_err());
    }

    #[test]
    fn guest_selection_deserializes_from_number_and_label() {
        let n: GuestSelection = serde_json::from_str("4").unwrap();
        assert_eq!(n.guest_count().unwrap(), 4);

        let l: GuestSelection = serde_json::from_str("\"10+\"").unwrap();
        assert_eq!(l.guest_count().unwrap(), 10);
    }

    // -- pricing -------------------------------------------------------------

    #[test]
    fn total_is_price_times_guests() {
        assert_eq!(compute_total_cents(50_000, 2), 100_000);
        assert_eq!(compute_total_cents(129_900, 10), 1_299_000);
    }

    // -- quick-inquiry parsing -----------------------------------------------

    #[test]
    fn travelers_defaults_to_one() {
        assert_eq!(parse_travelers(None), 1);
        assert_eq!(parse_travelers(Some("")), 1);
        assert_eq!(parse_travelers(Some("two")), 1);
        assert_eq!(parse_travelers(Some("0")), 1);
        assert_eq!(parse_travelers(Some("-2")), 1);
    }

    #[test]
    fn travelers_parses_valid_counts() {
        assert_eq!(parse_travelers(Some("3")), 3);
        assert_eq!(parse_travelers(Some(" 12 ")), 12);
    }

    #[test]
    fn empty_start_date_defaults_to_today() {
        let today = Utc::now().date_naive();
        assert_eq!(parse_start_date(None).unwrap(), today);
        assert_eq!(parse_start_date(Some("")).unwrap(), today);
        assert_eq!(parse_start_date(Some("   ")).unwrap(), today);
    }

    #[test]
    fn valid_start_date_is_parsed() {
        assert_eq!(
            parse_start_date(Some("2026-09-15")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()
        );
    }

    #[test]
    fn malformed_start_date_is_rejected() {
        assert!(parse_start_date(Some("15/09/2026")).is_err());
        assert!(parse_start_date(Some("soon")).is_err());
    }
}
