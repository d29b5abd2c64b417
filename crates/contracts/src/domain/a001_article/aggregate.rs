use crate::domain::common::{CatalogEntry, ItemId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ItemId,
    pub category: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: NaiveDate,
    #[serde(rename = "readMinutes", default)]
    pub read_minutes: u32,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    /// Publish date the way article cards print it, e.g. "Mar 15, 2024".
    pub fn published_label(&self) -> String {
        self.published.format("%b %-d, %Y").to_string()
    }

    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_minutes.max(1))
    }
}

impl CatalogEntry for Article {
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
        &self.excerpt
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_article() {
        let json = r#"{
            "id": "intro-to-apis",
            "category": "web",
            "title": "Intro to APIs",
            "excerpt": "What an endpoint really is.",
            "tags": ["api", "web"],
            "published": "2024-03-05",
            "readMinutes": 6
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id.as_str(), "intro-to-apis");
        assert_eq!(article.published_label(), "Mar 5, 2024");
        assert_eq!(article.read_time_label(), "6 min read");
        assert!(!article.featured);
        assert_eq!(article.url, None);
    }
}
