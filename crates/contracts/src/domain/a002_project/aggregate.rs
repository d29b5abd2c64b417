use crate::domain::common::{CatalogEntry, ItemId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ItemId,
    /// Space separated category list, e.g. `"web mobile"`.
    pub category: String,
    pub title: String,
    #[serde(alias = "excerpt")]
    pub description: String,
    /// Technology stack badges.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "demoUrl", default)]
    pub demo_url: Option<String>,
    #[serde(rename = "repoUrl", default)]
    pub repo_url: Option<String>,
}

impl CatalogEntry for Project {
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
