use crate::config::site_config;
use crate::content::PROJECTS_JSON;
use crate::shared::catalog_view::{load_catalog, CatalogFilter};
use contracts::domain::a002_project::aggregate::Project;

/// Projects filter: category tabs only.
pub fn create_state() -> CatalogFilter<Project> {
    let catalog = load_catalog::<Project>("projects", PROJECTS_JSON);
    CatalogFilter::new(catalog, site_config().catalog.projects_policy)
}
