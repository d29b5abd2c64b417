//! Pure category and search predicates.

use super::ALL_CATEGORIES;
use crate::domain::common::CatalogEntry;
use serde::{Deserialize, Serialize};

/// How an item's raw category value is compared with the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryMatch {
    /// The whole category value must equal the filter.
    #[default]
    Exact,
    /// The category is a comma/whitespace separated list; one token must
    /// equal the filter.
    AnyOf,
    /// Raw substring containment, so `"webdesign"` matches `"web"`.
    /// Kept for content written against the old card markup.
    Substring,
}

/// Split a raw category value into its tokens.
pub fn category_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

pub fn matches_category<T>(item: &T, active_category: &str, policy: CategoryMatch) -> bool
where
    T: CatalogEntry + ?Sized,
{
    if active_category == ALL_CATEGORIES {
        return true;
    }

    let category = item.category();
    match policy {
        CategoryMatch::Exact => category == active_category,
        CategoryMatch::AnyOf => category_tokens(category).any(|token| token == active_category),
        CategoryMatch::Substring => category.contains(active_category),
    }
}

/// Case-insensitive substring search over title, excerpt and tags.
///
/// Tags are joined with a single space before matching, so a query may span
/// two adjacent tags.
pub fn matches_query<T>(item: &T, query: &str) -> bool
where
    T: CatalogEntry + ?Sized,
{
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    if item.title().to_lowercase().contains(&needle) {
        return true;
    }
    if item.excerpt().to_lowercase().contains(&needle) {
        return true;
    }
    item.tags().join(" ").to_lowercase().contains(&needle)
}
