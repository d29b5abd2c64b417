use contracts::shared::catalog::ALL_CATEGORIES;
use leptos::prelude::*;

/// Category tab strip. The `"all"` tab always comes first.
///
/// Exactly one tab carries the `active` class: the one equal to `active`.
#[component]
pub fn FilterTabs(
    /// Categories present in the catalog, without `"all"`.
    categories: Vec<String>,
    #[prop(into)] active: Signal<String>,
    on_select: Callback<String>,
    #[prop(default = "All")] all_label: &'static str,
) -> impl IntoView {
    let tabs: Vec<(String, String)> = std::iter::once((ALL_CATEGORIES.to_string(), all_label.to_string()))
        .chain(categories.into_iter().map(|c| {
            let label = category_label(&c);
            (c, label)
        }))
        .collect();

    view! {
        <div class="filter-tabs" role="tablist">
            {tabs
                .into_iter()
                .map(|(value, label)| {
                    let is_active = {
                        let value = value.clone();
                        move || active.get() == value
                    };
                    let click_value = value.clone();
                    view! {
                        <button
                            class="filter-btn"
                            class:active=is_active.clone()
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            data-filter=value
                            on:click=move |_| on_select.run(click_value.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Display label for a category slug: `"web-apps"` -> `"Web Apps"`.
pub fn category_label(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
