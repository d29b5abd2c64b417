use crate::domain::common::{CatalogEntry, ItemId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: ItemId,
    /// Comma separated category list, e.g. `"backend,cloud"`.
    pub category: String,
    pub title: String,
    pub issuer: String,
    #[serde(alias = "excerpt", default)]
    pub description: String,
    /// Skills covered by the certificate.
    #[serde(default)]
    pub tags: Vec<String>,
    pub issued: NaiveDate,
    #[serde(rename = "credentialUrl", default)]
    pub credential_url: Option<String>,
}

impl Certificate {
    pub fn issued_label(&self) -> String {
        self.issued.format("%B %Y").to_string()
    }
}

impl CatalogEntry for Certificate {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_defaults_to_empty() {
        let json = r#"{
            "id": "aws-ccp",
            "category": "cloud",
            "title": "AWS Cloud Practitioner",
            "issuer": "Amazon Web Services",
            "issued": "2023-11-20"
        }"#;
        let cert: Certificate = serde_json::from_str(json).unwrap();
        assert_eq!(cert.excerpt(), "");
        assert!(cert.tags().is_empty());
        assert_eq!(cert.issued_label(), "November 2023");
    }
}
