use crate::domain::common::{CatalogEntry, ItemId};
use serde::{Deserialize, Serialize};

/// Minimal view-model projection of a catalog entry.
///
/// Pages normally filter their own aggregates directly; `Item` is the shape
/// used when only the searchable fields matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            excerpt: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Project any catalog entry onto its searchable fields.
    pub fn project<T: CatalogEntry + ?Sized>(entry: &T) -> Self {
        Self {
            id: entry.id().clone(),
            category: entry.category().to_string(),
            title: entry.title().to_string(),
            excerpt: entry.excerpt().to_string(),
            tags: entry.tags().to_vec(),
        }
    }
}

impl CatalogEntry for Item {
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
