use crate::config::site_config;
use crate::content::ARTICLES_JSON;
use crate::shared::catalog_view::{load_catalog, CatalogFilter};
use contracts::domain::a001_article::aggregate::Article;
use contracts::shared::catalog::FilterState;

/// Articles filter: category tabs plus search, paged reveal.
pub fn create_state(initial: FilterState) -> CatalogFilter<Article> {
    let cfg = &site_config().catalog;
    let catalog = load_catalog::<Article>("articles", ARTICLES_JSON);
    CatalogFilter::with_options(catalog, cfg.articles_policy, cfg.articles_page_size, initial)
}
