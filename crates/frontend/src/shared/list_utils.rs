//! Search input and match highlighting for catalog grids.

use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Byte ranges of case-insensitive matches of `query` in `text`.
///
/// Matching runs on the lowercased text, and every range is mapped back
/// onto whole characters of `text`. A match that starts or ends inside
/// the lowercase expansion of a single character is not reported.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    // (offset in the lowercased text, start in `text`) per source char
    let mut lower = String::with_capacity(text.len());
    let mut spans: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        spans.push((lower.len(), start));
        lower.extend(ch.to_lowercase());
    }

    let source_offset = |lower_offset: usize| -> Option<usize> {
        if lower_offset == lower.len() {
            return Some(text.len());
        }
        spans
            .binary_search_by_key(&lower_offset, |&(at, _)| at)
            .ok()
            .map(|i| spans[i].1)
    };

    let mut ranges = Vec::new();
    let mut last = 0;
    while let Some(pos) = lower[last..].find(&query_lower) {
        let start = last + pos;
        let end = start + query_lower.len();
        if let (Some(s), Some(e)) = (source_offset(start), source_offset(end)) {
            ranges.push((s, e));
        }
        last = end;
    }
    ranges
}

/// Wrap every match of `query` in `<mark>`.
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current query, for the "active" styling
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced query
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, into)]
    id: Option<String>,
    /// Debounce delay in ms
    #[prop(default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounced value
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.set_value(None);
        }
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = Closure::once_into_js(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            debounce_ms as i32,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let clear = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_active = move || !value.get().is_empty();

    view! {
        <div class=move || if is_active() { "search-box search-box--active" } else { "search-box" }>
            <span class="search-box__icon">{icon("search")}</span>
            <input
                type="text"
                id=id
                class="search-input"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-box__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Intro to APIs", "api"), vec![(9, 12)]);
        assert_eq!(match_ranges("aXa xa", "xa"), vec![(1, 3), (4, 6)]);
    }

    #[test]
    fn test_match_ranges_empty_or_missing() {
        assert!(match_ranges("Flutter Tips", "").is_empty());
        assert!(match_ranges("Flutter Tips", "rust").is_empty());
    }

    #[test]
    fn test_match_ranges_maps_expanding_lowercase() {
        // 'İ' lowercases to two code points
        let text = "İstanbul";
        let ranges = match_ranges(text, "stan");
        assert_eq!(ranges, vec![(2, 6)]);
        assert_eq!(&text[2..6], "stan");
    }

    #[test]
    fn test_match_ranges_stay_on_char_boundaries() {
        // 'ẞ' shrinks and 'İ' grows when lowercased, total length unchanged
        let text = "ẞİ guide";
        assert_eq!(text.to_lowercase().len(), text.len());

        let ranges = match_ranges(text, "i");
        assert_eq!(ranges, vec![(8, 9)]);
        for (start, end) in ranges {
            assert!(text.is_char_boundary(start));
            assert!(text.is_char_boundary(end));
            assert_eq!(text[start..end].to_lowercase(), "i");
        }
    }

    #[test]
    fn test_match_ranges_multibyte_text() {
        let text = "Größe der API";
        let ranges = match_ranges(text, "api");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "API");
    }
}
