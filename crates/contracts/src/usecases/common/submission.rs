use crate::shared::error::ValidationError;
use crate::usecases::u001_contact::ContactRequest;
use crate::usecases::u002_newsletter::NewsletterRequest;
use serde::{Deserialize, Serialize};

/// Any form payload that crosses the submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Contact(ContactRequest),
    Newsletter(NewsletterRequest),
}

impl Submission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Submission::Contact(r) => r.validate(),
            Submission::Newsletter(r) => r.validate(),
        }
    }

    /// Message shown once the submission succeeded.
    pub fn success_message(&self) -> &'static str {
        match self {
            Submission::Contact(_) => "Message sent successfully!",
            Submission::Newsletter(_) => "Successfully subscribed to newsletter!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_json() {
        let s = Submission::Newsletter(NewsletterRequest::new("a@b.co"));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["kind"], "newsletter");
        assert_eq!(json["email"], "a@b.co");
    }

    #[test]
    fn test_validate_dispatch() {
        let bad = Submission::Newsletter(NewsletterRequest::new("nope"));
        assert_eq!(bad.validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(bad.success_message(), "Successfully subscribed to newsletter!");
    }
}
