use crate::shared::error::ValidationError;
use crate::shared::validation::{min_length, require, validate_email};
use serde::{Deserialize, Serialize};

/// Contact form payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub const MIN_MESSAGE_LEN: usize = 10;

    /// Checks fields in form order and reports the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Name", &self.name)?;
        validate_email(&self.email)?;
        require("Message", &self.message)?;
        min_length("Message", &self.message, Self::MIN_MESSAGE_LEN)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_valid_without_subject() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_first_problem_wins() {
        let request = ContactRequest {
            name: " ".to_string(),
            email: "bad".to_string(),
            ..filled()
        };
        assert_eq!(request.validate(), Err(ValidationError::Required("Name")));

        let request = ContactRequest {
            email: "bad".to_string(),
            ..filled()
        };
        assert_eq!(request.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_short_message() {
        let request = ContactRequest {
            message: "hi".to_string(),
            ..filled()
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::TooShort {
                field: "Message",
                min: 10
            })
        );
    }
}
