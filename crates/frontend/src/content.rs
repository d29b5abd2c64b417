//! Catalog content embedded at build time.

pub const ARTICLES_JSON: &str = include_str!("../content/articles.json");
pub const PROJECTS_JSON: &str = include_str!("../content/projects.json");
pub const CERTIFICATES_JSON: &str = include_str!("../content/certificates.json");

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_article::aggregate::Article;
    use contracts::domain::a002_project::aggregate::Project;
    use contracts::domain::a003_certificate::aggregate::Certificate;
    use contracts::shared::catalog::content::parse_catalog;

    #[test]
    fn test_embedded_content_is_clean() {
        let articles = parse_catalog::<Article>(ARTICLES_JSON).unwrap();
        assert!(articles.rejected.is_empty());
        assert!(articles.catalog.len() > 6);

        let projects = parse_catalog::<Project>(PROJECTS_JSON).unwrap();
        assert!(projects.rejected.is_empty());
        assert!(!projects.catalog.is_empty());

        let certificates = parse_catalog::<Certificate>(CERTIFICATES_JSON).unwrap();
        assert!(certificates.rejected.is_empty());
        assert!(!certificates.catalog.is_empty());
    }
}
