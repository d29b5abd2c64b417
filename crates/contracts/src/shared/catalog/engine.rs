//! Filtering engine: one category axis, one search axis, optional paged
//! reveal. Pages with a single axis leave the other at its neutral value.

use super::catalog::Catalog;
use super::predicates::{matches_category, matches_query, CategoryMatch};
use super::ALL_CATEGORIES;
use crate::domain::common::{CatalogEntry, ItemId};
use serde::{Deserialize, Serialize};

/// Per-page filter state. Lives for one page session, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(rename = "category", default = "default_category")]
    pub active_category: String,
    #[serde(rename = "q", default)]
    pub active_query: String,
    #[serde(skip, default = "default_pages_shown")]
    pub pages_shown: usize,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_pages_shown() -> usize {
    1
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: default_category(),
            active_query: String::new(),
            pages_shown: default_pages_shown(),
        }
    }
}

impl FilterState {
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.active_category = category.into();
        self.pages_shown = 1;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.active_query = query.into();
        self.pages_shown = 1;
    }

    /// Number of active filters, for the badge next to the filter bar.
    pub fn active_filters(&self) -> usize {
        let mut count = 0;
        if self.active_category != ALL_CATEGORIES {
            count += 1;
        }
        if !self.active_query.is_empty() {
            count += 1;
        }
        count
    }
}

/// Visibility decision for one catalog entry.
#[derive(Debug, PartialEq)]
pub struct Visibility<'a, T> {
    pub item: &'a T,
    pub visible: bool,
}

impl<T> Clone for Visibility<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Visibility<'_, T> {}

/// Evaluate every entry in catalog order: visible iff both predicates hold.
pub fn recompute<'a, T: CatalogEntry>(
    catalog: &'a Catalog<T>,
    state: &FilterState,
    policy: CategoryMatch,
) -> Vec<Visibility<'a, T>> {
    catalog
        .iter()
        .map(|item| Visibility {
            item,
            visible: matches_category(item, &state.active_category, policy)
                && matches_query(item, &state.active_query),
        })
        .collect()
}

/// Catalog plus the state that filters it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteringEngine<T> {
    catalog: Catalog<T>,
    state: FilterState,
    policy: CategoryMatch,
    page_size: Option<usize>,
}

impl<T: CatalogEntry> FilteringEngine<T> {
    pub fn new(catalog: Catalog<T>, policy: CategoryMatch) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
            policy,
            page_size: None,
        }
    }

    /// Reveal matches one page at a time. Zero disables paging.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = (page_size > 0).then_some(page_size);
        self
    }

    pub fn with_state(mut self, state: FilterState) -> Self {
        self.state = FilterState {
            pages_shown: state.pages_shown.max(1),
            ..state
        };
        self
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn policy(&self) -> CategoryMatch {
        self.policy
    }

    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    /// Visibility of every entry. With paging enabled, matches past the
    /// revealed pages are reported as not visible.
    pub fn recompute(&self) -> Vec<Visibility<'_, T>> {
        let mut decisions = recompute(&self.catalog, &self.state, self.policy);
        if let Some(limit) = self.reveal_limit() {
            let mut shown = 0;
            for decision in decisions.iter_mut().filter(|d| d.visible) {
                if shown >= limit {
                    decision.visible = false;
                } else {
                    shown += 1;
                }
            }
        }
        decisions
    }

    pub fn select_category(&mut self, category: impl Into<String>) -> Vec<Visibility<'_, T>> {
        self.state.select_category(category);
        self.recompute()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Vec<Visibility<'_, T>> {
        self.state.set_query(query);
        self.recompute()
    }

    /// Reveal one more page. No-op when every match is already shown.
    pub fn load_more(&mut self) -> Vec<Visibility<'_, T>> {
        if self.has_more() {
            self.state.pages_shown += 1;
        }
        self.recompute()
    }

    /// Visible entries in catalog order.
    pub fn visible(&self) -> Vec<&T> {
        self.recompute()
            .into_iter()
            .filter(|d| d.visible)
            .map(|d| d.item)
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<ItemId> {
        self.visible().into_iter().map(|item| item.id().clone()).collect()
    }

    /// Entries matching both predicates, revealed or not.
    pub fn match_count(&self) -> usize {
        recompute(&self.catalog, &self.state, self.policy)
            .iter()
            .filter(|d| d.visible)
            .count()
    }

    pub fn has_more(&self) -> bool {
        match self.reveal_limit() {
            Some(limit) => self.match_count() > limit,
            None => false,
        }
    }

    fn reveal_limit(&self) -> Option<usize> {
        self.page_size
            .map(|size| size.saturating_mul(self.state.pages_shown.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::Item;

    fn sample_catalog() -> Catalog<Item> {
        Catalog::build(vec![
            Item::new("1", "web", "Intro to APIs").with_tags(["api", "web"]),
            Item::new("2", "mobile", "Flutter Tips").with_tags(["flutter"]),
        ])
        .catalog
    }

    fn engine() -> FilteringEngine<Item> {
        FilteringEngine::new(sample_catalog(), CategoryMatch::Exact)
    }

    fn ids(engine: &FilteringEngine<Item>) -> Vec<String> {
        engine
            .visible_ids()
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    fn numbered(count: usize, category: &str) -> Catalog<Item> {
        Catalog::build((0..count).map(|i| Item::new(format!("n{i}").as_str(), category, format!("Post {i}"))))
            .catalog
    }

    #[test]
    fn test_default_state_shows_everything() {
        let e = engine();
        assert_eq!(e.state().active_category, "all");
        assert_eq!(e.state().active_query, "");
        assert_eq!(ids(&e), vec!["1", "2"]);
    }

    #[test]
    fn test_scenario_select_web() {
        let mut e = engine();
        e.select_category("web");
        assert_eq!(ids(&e), vec!["1"]);
    }

    #[test]
    fn test_scenario_all_then_query() {
        let mut e = engine();
        e.select_category("all");
        e.set_query("flutter");
        assert_eq!(ids(&e), vec!["2"]);
    }

    #[test]
    fn test_scenario_no_match_is_empty() {
        let mut e = engine();
        let decisions = e.set_query("zzz-no-match");
        assert_eq!(decisions.len(), 2);
        assert!(decisions.iter().all(|d| !d.visible));
        assert!(ids(&e).is_empty());
    }

    #[test]
    fn test_scenario_both_axes_must_hold() {
        let mut e = engine();
        e.select_category("mobile");
        e.set_query("api");
        assert!(ids(&e).is_empty());
    }

    #[test]
    fn test_axes_are_independent() {
        let mut e = engine();
        e.set_query("tips");
        e.select_category("mobile");
        assert_eq!(e.state().active_query, "tips");
        e.set_query("");
        assert_eq!(e.state().active_category, "mobile");
        assert_eq!(ids(&e), vec!["2"]);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let mut e = engine();
        e.set_query("i");
        let first: Vec<bool> = e.recompute().iter().map(|d| d.visible).collect();
        let second: Vec<bool> = e.recompute().iter().map(|d| d.visible).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_category_is_idempotent() {
        let mut once = engine();
        once.select_category("web");
        let mut twice = engine();
        twice.select_category("web");
        twice.select_category("web");
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_unknown_category_hides_everything() {
        let mut e = engine();
        e.select_category("desktop");
        assert!(ids(&e).is_empty());
    }

    #[test]
    fn test_visible_is_ordered_subsequence() {
        let catalog = Catalog::build(vec![
            Item::new("a", "web", "Alpha"),
            Item::new("b", "mobile", "Beta"),
            Item::new("c", "web", "Gamma"),
            Item::new("d", "web", "Delta"),
        ])
        .catalog;
        let mut e = FilteringEngine::new(catalog, CategoryMatch::Exact);
        e.select_category("web");
        assert_eq!(ids(&e), vec!["a", "c", "d"]);
        e.set_query("a");
        assert_eq!(ids(&e), vec!["a", "c", "d"]);
        e.set_query("lt");
        assert_eq!(ids(&e), vec!["d"]);
    }

    #[test]
    fn test_free_recompute_matches_engine_without_paging() {
        let state = FilterState {
            active_category: "web".to_string(),
            ..FilterState::default()
        };
        let catalog = sample_catalog();
        let free: Vec<bool> = recompute(&catalog, &state, CategoryMatch::Exact)
            .iter()
            .map(|d| d.visible)
            .collect();
        let e = FilteringEngine::new(catalog, CategoryMatch::Exact).with_state(state);
        let engine: Vec<bool> = e.recompute().iter().map(|d| d.visible).collect();
        assert_eq!(free, engine);
    }

    #[test]
    fn test_paging_and_load_more() {
        let mut e = FilteringEngine::new(numbered(8, "web"), CategoryMatch::Exact).with_page_size(3);
        assert_eq!(e.visible().len(), 3);
        assert_eq!(e.match_count(), 8);
        assert!(e.has_more());

        e.load_more();
        assert_eq!(e.visible().len(), 6);
        e.load_more();
        assert_eq!(e.visible().len(), 8);
        assert!(!e.has_more());

        e.load_more();
        assert_eq!(e.state().pages_shown, 3);
    }

    #[test]
    fn test_filter_change_resets_pages() {
        let mut e = FilteringEngine::new(numbered(8, "web"), CategoryMatch::Exact).with_page_size(3);
        e.load_more();
        assert_eq!(e.state().pages_shown, 2);

        e.set_query("post");
        assert_eq!(e.state().pages_shown, 1);
        assert_eq!(e.visible().len(), 3);

        e.load_more();
        e.select_category("web");
        assert_eq!(e.state().pages_shown, 1);
    }

    #[test]
    fn test_zero_page_size_disables_paging() {
        let e = FilteringEngine::new(numbered(5, "web"), CategoryMatch::Exact).with_page_size(0);
        assert_eq!(e.page_size(), None);
        assert_eq!(e.visible().len(), 5);
        assert!(!e.has_more());
    }

    #[test]
    fn test_any_of_policy_engine() {
        let catalog = Catalog::build(vec![
            Item::new("c1", "backend,cloud", "AWS"),
            Item::new("c2", "webdesign", "Figma"),
            Item::new("c3", "web", "HTML"),
        ])
        .catalog;
        let mut e = FilteringEngine::new(catalog.clone(), CategoryMatch::AnyOf);
        e.select_category("web");
        assert_eq!(ids(&e), vec!["c3"]);
        e.select_category("cloud");
        assert_eq!(ids(&e), vec!["c1"]);

        let mut legacy = FilteringEngine::new(catalog, CategoryMatch::Substring);
        legacy.select_category("web");
        assert_eq!(ids(&legacy), vec!["c2", "c3"]);
    }

    #[test]
    fn test_active_filters_count() {
        let mut state = FilterState::default();
        assert_eq!(state.active_filters(), 0);
        state.select_category("web");
        state.set_query("api");
        assert_eq!(state.active_filters(), 2);
    }

    #[test]
    fn test_empty_catalog_engine() {
        let mut e: FilteringEngine<Item> = FilteringEngine::new(Catalog::empty(), CategoryMatch::Exact);
        assert!(e.set_query("anything").is_empty());
        assert!(e.visible().is_empty());
        assert!(!e.has_more());
    }
}
