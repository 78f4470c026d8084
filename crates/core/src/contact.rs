//! Contact-message validation.

use crate::error::CoreError;
use crate::validate::require_non_empty;

/// Maximum length for the free-text message body (characters).
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Validate a new contact-message submission.
///
/// Name, email, and message are required; the subject line is optional.
/// There is no email format check beyond non-emptiness.
pub fn validate_new_message(name: &str, email: &str, message: &str) -> Result<(), CoreError> {
    require_non_empty("name", name)?;
    require_non_empty("email", email)?;
    require_non_empty("message", message)?;

    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {} characters (got {})",
            MAX_MESSAGE_LENGTH,
            message.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_message_is_valid() {
        assert!(validate_new_message("Jane", "jane@example.com", "Hello there").is_ok());
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert!(validate_new_message("", "jane@example.com", "Hi").is_err());
        assert!(validate_new_message("Jane", "  ", "Hi").is_err());
        assert!(validate_new_message("Jane", "jane@example.com", "").is_err());
    }

    #[test]
    fn message_within_limit_is_valid() {
        let body = "a".repeat(MAX_MESSAGE_LENGTH);
        assert!(validate_new_message("Jane", "jane@example.com", &body).is_ok());
    }

    #[test]
    fn message_over_limit_is_invalid() {
        let body = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert!(validate_new_message("Jane", "jane@example.com", &body).is_err());
    }
}
