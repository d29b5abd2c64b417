use crate::config::site_config;
use crate::content::CERTIFICATES_JSON;
use crate::shared::catalog_view::{load_catalog, CatalogFilter};
use contracts::domain::a003_certificate::aggregate::Certificate;
use contracts::shared::catalog::FilterState;

/// Certificates filter: category tabs only. A `limit` caps the grid, which
/// the index page uses for its preview.
pub fn create_state(limit: Option<usize>) -> CatalogFilter<Certificate> {
    let catalog = load_catalog::<Certificate>("certificates", CERTIFICATES_JSON);
    CatalogFilter::with_options(
        catalog,
        site_config().catalog.certificates_policy,
        limit.unwrap_or(0),
        FilterState::default(),
    )
}
