use crate::pages::Page;
use contracts::shared::catalog::{FilterState, ALL_CATEGORIES};
use leptos::prelude::*;
use web_sys::window;

/// Page-wide state shared by the navbar and the page body.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: Page,
    pub menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

/// Filter state carried in the query string (`?category=web&q=rust`).
/// Unknown or malformed parameters yield the default state, and a blank
/// category means every category.
pub fn filter_state_from_query(search: &str) -> FilterState {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        return FilterState::default();
    }
    match serde_qs::from_str::<FilterState>(search) {
        Ok(mut state) => {
            if state.active_category.trim().is_empty() {
                state.active_category = ALL_CATEGORIES.to_string();
            }
            state
        }
        Err(e) => {
            log::warn!("Ignoring query string {:?}: {}", search, e);
            FilterState::default()
        }
    }
}

/// Query string for a filter state; defaults are left out.
pub fn filter_state_to_query(state: &FilterState) -> String {
    let mut params = std::collections::BTreeMap::new();
    if state.active_category != ALL_CATEGORIES {
        params.insert("category", state.active_category.as_str());
    }
    if !state.active_query.is_empty() {
        params.insert("q", state.active_query.as_str());
    }
    if params.is_empty() {
        return String::new();
    }
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

pub fn read_query_state() -> FilterState {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    filter_state_from_query(&search)
}

/// Mirror the filter into the address bar without adding history entries.
pub fn write_query_state(state: &FilterState) {
    let Some(w) = window() else {
        return;
    };
    let new_search = filter_state_to_query(state);
    let current = w.location().search().unwrap_or_default();
    if current == new_search {
        return;
    }
    let url = if new_search.is_empty() {
        w.location().pathname().unwrap_or_default()
    } else {
        new_search
    };
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parsing() {
        let state = filter_state_from_query("?category=web&q=rust");
        assert_eq!(state.active_category, "web");
        assert_eq!(state.active_query, "rust");
        assert_eq!(state.pages_shown, 1);
    }

    #[test]
    fn test_missing_params_default() {
        let state = filter_state_from_query("?q=api");
        assert_eq!(state.active_category, "all");
        assert_eq!(state.active_query, "api");
        assert_eq!(filter_state_from_query(""), FilterState::default());
    }

    #[test]
    fn test_query_roundtrip_skips_defaults() {
        assert_eq!(filter_state_to_query(&FilterState::default()), "");
        let mut state = FilterState::default();
        state.select_category("mobile");
        assert_eq!(filter_state_to_query(&state), "?category=mobile");
    }

    #[test]
    fn test_blank_category_means_all() {
        let state = filter_state_from_query("?category=&q=");
        assert_eq!(state.active_category, ALL_CATEGORIES);
        assert_eq!(state.active_query, "");

        let state = filter_state_from_query("?category=%20&q=flutter");
        assert_eq!(state.active_category, ALL_CATEGORIES);
        assert_eq!(state.active_query, "flutter");
    }
}
