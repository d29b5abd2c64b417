pub mod state;

use self::state::create_state;
use crate::config::site_config;
use crate::layout::global_context::{read_query_state, write_query_state};
use crate::shared::catalog_view::CatalogGrid;
use crate::shared::components::filter_tabs::category_label;
use crate::shared::components::{CardAnimated, FilterTabs, LoadMoreButton};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_article::aggregate::Article;
use leptos::prelude::*;

#[component]
pub fn ArticleList() -> impl IntoView {
    let filter = create_state(read_query_state());
    let debounce_ms = site_config().catalog.search_debounce_ms;
    let categories = filter.categories();

    // Keep ?category=&q= in sync so a filtered view can be shared.
    Effect::new(move |_| {
        write_query_state(&filter.state());
    });

    let query = Signal::derive(move || filter.active_query());
    let active = Signal::derive(move || filter.active_category());

    view! {
        <div class="articles-controls">
            <SearchInput
                value=query
                on_change=Callback::new(move |q: String| filter.set_query(q))
                placeholder="Search articles..."
                id="article-search"
                debounce_ms=debounce_ms
            />
            <FilterTabs
                categories=categories
                active=active
                on_select=Callback::new(move |c: String| filter.select_category(c))
            />
        </div>
        <p class="results-count">
            {move || results_label(filter.match_count())}
            {move || {
                let count = filter.active_filters();
                if count > 0 {
                    view! {
                        <span class="filter-badge" title="Active filters">{filters_label(count)}</span>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </p>
        <CatalogGrid
            filter=filter
            class="articles-grid"
            id="articles-grid"
            empty_message="No articles found. Try a different search or category."
            render=move |article: Article, delay: u32| view! { <ArticleCard article=article delay_ms=delay query=query /> }
        />
        <LoadMoreButton
            has_more=Signal::derive(move || filter.has_more())
            total_count=Signal::derive(move || filter.match_count())
            shown_count=Signal::derive(move || filter.shown_count())
            on_load_more=Callback::new(move |_| filter.load_more())
        />
    }
}

fn results_label(count: usize) -> String {
    match count {
        1 => "1 article".to_string(),
        n => format!("{} articles", n),
    }
}

fn filters_label(count: usize) -> String {
    match count {
        1 => "1 filter".to_string(),
        n => format!("{} filters", n),
    }
}

#[component]
fn ArticleCard(article: Article, delay_ms: u32, query: Signal<String>) -> impl IntoView {
    let title = article.title.clone();
    let excerpt = article.excerpt.clone();
    let href = article.url.clone().unwrap_or_else(|| "#".to_string());
    let card_class = if article.featured {
        "article-card featured"
    } else {
        "article-card"
    };

    view! {
        <CardAnimated delay_ms=delay_ms class=card_class ripple=true>
            <div class="article-meta">
                <span class="article-category">{category_label(&article.category)}</span>
                <span class="article-date">{article.published_label()}</span>
                <span class="article-read-time">{article.read_time_label()}</span>
            </div>
            <h3 class="article-title">{move || highlight_matches(&title, &query.get())}</h3>
            <p class="article-excerpt">{move || highlight_matches(&excerpt, &query.get())}</p>
            <div class="article-tags">
                {article
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                    .collect_view()}
            </div>
            <a class="article-link" href=href target="_blank" rel="noopener">
                "Read More " {icon("external")}
            </a>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::catalog::FilterState;

    #[test]
    fn test_results_label() {
        assert_eq!(results_label(0), "0 articles");
        assert_eq!(results_label(1), "1 article");
        assert_eq!(results_label(7), "7 articles");
    }

    #[test]
    fn test_filters_label_counts_active_axes() {
        let mut state = FilterState::default();
        assert_eq!(state.active_filters(), 0);

        state.select_category("web");
        assert_eq!(filters_label(state.active_filters()), "1 filter");

        state.set_query("rust");
        assert_eq!(filters_label(state.active_filters()), "2 filters");
    }
}
