//! Reactive wrapper around the filtering engine and the grid renderer that
//! applies its visibility decisions.

use crate::config::site_config;
use crate::shared::components::card_animated::stagger_delay;
use contracts::domain::common::CatalogEntry;
use contracts::shared::catalog::content::parse_catalog;
use contracts::shared::catalog::{Catalog, CategoryMatch, FilterState, FilteringEngine};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

/// Build a catalog from an embedded JSON document.
///
/// Never fails: a malformed document yields an empty catalog and rejected
/// entries are only logged.
pub fn load_catalog<T>(name: &str, json: &str) -> Catalog<T>
where
    T: CatalogEntry + DeserializeOwned,
{
    match parse_catalog::<T>(json) {
        Ok(load) => {
            for rejected in &load.rejected {
                log::warn!("{} catalog: skipped {}", name, rejected);
            }
            log::debug!("{} catalog: {} entries", name, load.catalog.len());
            load.catalog
        }
        Err(e) => {
            log::error!("{} catalog unavailable: {}", name, e);
            Catalog::empty()
        }
    }
}

/// Per-page filter handle. Owns the engine; the grid reads from it.
pub struct CatalogFilter<T: Send + Sync + 'static> {
    engine: RwSignal<FilteringEngine<T>>,
    /// Bumped on every category/query change so the grid replays the
    /// entrance animation. Paging keeps it, so revealed cards stay put.
    revision: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for CatalogFilter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CatalogFilter<T> {}

impl<T> CatalogFilter<T>
where
    T: CatalogEntry + Clone + Send + Sync + 'static,
{
    pub fn new(catalog: Catalog<T>, policy: CategoryMatch) -> Self {
        Self::with_options(catalog, policy, 0, FilterState::default())
    }

    /// `page_size` of zero shows every match at once.
    pub fn with_options(
        catalog: Catalog<T>,
        policy: CategoryMatch,
        page_size: usize,
        initial: FilterState,
    ) -> Self {
        let engine = FilteringEngine::new(catalog, policy)
            .with_page_size(page_size)
            .with_state(initial);
        Self {
            engine: RwSignal::new(engine),
            revision: RwSignal::new(0),
        }
    }

    pub fn select_category(&self, category: String) {
        log::debug!("Category filter: {}", category);
        self.engine.update(|e| {
            let _ = e.select_category(category);
        });
        self.revision.update(|r| *r += 1);
    }

    pub fn set_query(&self, query: String) {
        self.engine.update(|e| {
            let _ = e.set_query(query);
        });
        self.revision.update(|r| *r += 1);
    }

    pub fn load_more(&self) {
        self.engine.update(|e| {
            let _ = e.load_more();
        });
    }

    pub fn active_category(&self) -> String {
        self.engine.with(|e| e.state().active_category.clone())
    }

    pub fn active_query(&self) -> String {
        self.engine.with(|e| e.state().active_query.clone())
    }

    /// Snapshot of the filter state, for mirroring into the URL.
    pub fn state(&self) -> FilterState {
        self.engine.with(|e| e.state().clone())
    }

    pub fn active_filters(&self) -> usize {
        self.engine.with(|e| e.state().active_filters())
    }

    /// Visible entries in catalog order.
    pub fn visible(&self) -> Vec<T> {
        self.engine
            .with(|e| e.visible().into_iter().cloned().collect())
    }

    pub fn match_count(&self) -> usize {
        self.engine.with(|e| e.match_count())
    }

    /// Number of entries currently rendered.
    pub fn shown_count(&self) -> usize {
        self.engine.with(|e| e.visible().len())
    }

    pub fn has_more(&self) -> bool {
        self.engine.with(|e| e.has_more())
    }

    pub fn page_size(&self) -> Option<usize> {
        self.engine.with_untracked(|e| e.page_size())
    }

    pub fn categories(&self) -> Vec<String> {
        self.engine
            .with_untracked(|e| e.catalog().categories(e.policy()))
    }

    pub fn revision(&self) -> u64 {
        self.revision.get()
    }
}

/// Renders the visible entries in order, each with a staggered entrance.
///
/// `render` receives the entry and its entrance delay in ms.
#[component]
pub fn CatalogGrid<T, F, IV>(
    filter: CatalogFilter<T>,
    render: F,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = "No items match the current filter.")] empty_message: &'static str,
) -> impl IntoView
where
    T: CatalogEntry + Clone + Send + Sync + 'static,
    F: Fn(T, u32) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let stagger_ms = site_config().catalog.stagger_ms;
    let page_size = filter.page_size();
    let grid_class = if class.is_empty() {
        "catalog-grid".to_string()
    } else {
        format!("catalog-grid {}", class)
    };

    let entries = move || {
        let revision = filter.revision();
        filter
            .visible()
            .into_iter()
            .enumerate()
            .map(|(position, entry)| (revision, position, entry))
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || { filter.match_count() > 0 }
            fallback=move || view! { <p class="catalog-empty">{empty_message}</p> }
        >
            <div class=grid_class.clone() id=id.clone()>
                <For
                    each=entries
                    key=|(revision, _, entry)| (*revision, entry.id().clone())
                    children={
                        let render = render.clone();
                        move |(_, position, entry)| {
                            render(entry, stagger_delay(position, page_size, stagger_ms))
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_project::aggregate::Project;

    #[test]
    fn test_load_catalog_keeps_valid_entries() {
        let json = r#"[
            {"id": "a", "category": "web", "title": "Shop", "description": "Cart"},
            {"id": "b", "category": "all", "title": "Reserved", "description": ""},
            {"id": "c", "category": "mobile", "title": "Tracker", "description": "Flutter"}
        ]"#;
        let catalog = load_catalog::<Project>("projects", json);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_catalog_malformed_is_empty() {
        let catalog = load_catalog::<Project>("projects", "{ not json");
        assert!(catalog.is_empty());
    }
}
