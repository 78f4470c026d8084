//! Field-level validation helpers shared across domains.

use crate::error::CoreError;

/// Validate that a required free-text field is non-empty after trimming.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(require_non_empty("location", "").is_err());
        assert!(require_non_empty("location", "   ").is_err());
        assert!(require_non_empty("location", "\t\n").is_err());
    }

    #[test]
    fn non_blank_values_pass() {
        assert!(require_non_empty("location", "Lisbon").is_ok());
        assert!(require_non_empty("location", " x ").is_ok());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = require_non_empty("email", "").unwrap_err();
        assert!(err.to_string().contains("email"));
    }
}
