//! Site configuration embedded at build time.

use contracts::shared::config::{load_site_config, SiteConfig};
use once_cell::sync::Lazy;

const SITE_TOML: &str = include_str!("../site.toml");

/// Parsed once on first use; a broken `site.toml` falls back to defaults.
pub static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| match load_site_config(SITE_TOML) {
    Ok(config) => config,
    Err(e) => {
        log::error!("site.toml is invalid, using defaults: {:#}", e);
        SiteConfig::default()
    }
});

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = load_site_config(SITE_TOML);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.catalog.articles_page_size, 6);
        assert_eq!(config.particles.count, 50);
        assert!(!config.typewriter.phrases.is_empty());
    }
}
