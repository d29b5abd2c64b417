use super::predicates::{category_tokens, CategoryMatch};
use super::ALL_CATEGORIES;
use crate::domain::common::{CatalogEntry, ItemId};
use crate::shared::error::CatalogError;
use std::collections::HashSet;

/// Ordered, immutable list of browsable entries for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: Vec<T>,
}

/// A built catalog together with the entries that were left out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad<T> {
    pub catalog: Catalog<T>,
    pub rejected: Vec<CatalogError>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Catalog<T> {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog in source order, skipping entries that break the
    /// item invariants.
    pub fn build<I>(entries: I) -> CatalogLoad<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut kept = Vec::new();
        let mut rejected = Vec::new();
        let mut seen: HashSet<ItemId> = HashSet::new();

        for (position, entry) in entries.into_iter().enumerate() {
            match check_entry(&entry, position, &seen) {
                Ok(()) => {
                    seen.insert(entry.id().clone());
                    kept.push(entry);
                }
                Err(e) => rejected.push(e),
            }
        }

        CatalogLoad {
            catalog: Self { entries: kept },
            rejected,
        }
    }

    /// Distinct filterable categories in order of first appearance.
    pub fn categories(&self, policy: CategoryMatch) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for entry in &self.entries {
            let raw = entry.category();
            let values: Vec<&str> = match policy {
                CategoryMatch::Exact => vec![raw],
                CategoryMatch::AnyOf | CategoryMatch::Substring => category_tokens(raw).collect(),
            };
            for value in values {
                if seen.insert(value.to_string()) {
                    out.push(value.to_string());
                }
            }
        }
        out
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn check_entry<T: CatalogEntry>(
    entry: &T,
    position: usize,
    seen: &HashSet<ItemId>,
) -> Result<(), CatalogError> {
    let id = entry.id();
    if id.is_empty() {
        return Err(CatalogError::EmptyId { position });
    }

    let category = entry.category();
    if category.trim().is_empty() {
        return Err(CatalogError::EmptyCategory { id: id.clone() });
    }
    if category_tokens(category).any(|token| token == ALL_CATEGORIES) {
        return Err(CatalogError::ReservedCategory { id: id.clone() });
    }

    if seen.contains(id) {
        return Err(CatalogError::DuplicateId { id: id.clone() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::Item;

    #[test]
    fn test_build_keeps_document_order() {
        let load = Catalog::build(vec![
            Item::new("c", "web", "C"),
            Item::new("a", "mobile", "A"),
            Item::new("b", "web", "B"),
        ]);
        let ids: Vec<&str> = load.catalog.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert!(load.rejected.is_empty());
    }

    #[test]
    fn test_build_rejects_invalid_entries() {
        let load = Catalog::build(vec![
            Item::new("ok", "web", "Fine"),
            Item::new("", "web", "No id"),
            Item::new("blank", "  ", "No category"),
            Item::new("wild", "all", "Reserved"),
            Item::new("ok", "mobile", "Duplicate"),
        ]);
        assert_eq!(load.catalog.len(), 1);
        assert_eq!(
            load.rejected,
            vec![
                CatalogError::EmptyId { position: 1 },
                CatalogError::EmptyCategory { id: "blank".into() },
                CatalogError::ReservedCategory { id: "wild".into() },
                CatalogError::DuplicateId { id: "ok".into() },
            ]
        );
    }

    #[test]
    fn test_reserved_category_inside_list() {
        let load = Catalog::build(vec![Item::new("x", "web,all", "Sneaky")]);
        assert!(load.catalog.is_empty());
        assert_eq!(load.rejected.len(), 1);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let load: CatalogLoad<Item> = Catalog::build(Vec::new());
        assert!(load.catalog.is_empty());
        assert!(load.rejected.is_empty());
    }

    #[test]
    fn test_categories_by_policy() {
        let catalog = Catalog::build(vec![
            Item::new("1", "web mobile", "One"),
            Item::new("2", "cloud", "Two"),
            Item::new("3", "mobile", "Three"),
        ])
        .catalog;
        assert_eq!(
            catalog.categories(CategoryMatch::AnyOf),
            vec!["web", "mobile", "cloud"]
        );
        assert_eq!(
            catalog.categories(CategoryMatch::Exact),
            vec!["web mobile", "cloud", "mobile"]
        );
    }
}
