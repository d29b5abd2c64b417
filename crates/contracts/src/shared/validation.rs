//! Form field validation.

use crate::shared::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validate an email address. Surrounding whitespace is ignored.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required("Email"));
    }
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn min_length(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("me@example.com").is_ok());
        assert!(validate_email("  first.last+tag@sub.domain.io ").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(ValidationError::Required("Email")));
        assert_eq!(validate_email("   "), Err(ValidationError::Required("Email")));
        assert_eq!(validate_email("plainaddress"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("no@tld"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("two@@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("sp ace@example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_min_length_counts_chars() {
        assert!(min_length("Message", "héllo", 5).is_ok());
        assert_eq!(
            min_length("Message", " hi ", 5),
            Err(ValidationError::TooShort { field: "Message", min: 5 })
        );
    }
}
