//! Site configuration.
//!
//! The frontend embeds `site.toml` and parses it once at start. Every field
//! has a default so the file only needs to carry what differs.

use crate::shared::catalog::CategoryMatch;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub typewriter: TypewriterConfig,
    pub loading: LoadingConfig,
    pub particles: ParticlesConfig,
    pub catalog: CatalogConfig,
    pub notifications: NotificationsConfig,
    pub forms: FormsConfig,
    pub cursor: CursorConfig,
    pub transition: TransitionConfig,
    pub scroll: ScrollConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "Full Stack Developer",
                "Laravel Expert",
                "Flutter Developer",
                "API Specialist",
                "Problem Solver",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            pause_ms: 500,
        }
    }
}

/// One loading-screen message, shown while progress is below `until`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoadingStage {
    pub until: f64,
    pub message: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoadingConfig {
    pub tick_ms: u32,
    pub min_step: f64,
    pub max_step: f64,
    /// Delay between reaching 100% and hiding the screen.
    pub hide_delay_ms: u32,
    pub stages: Vec<LoadingStage>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        let stage = |until: f64, message: &str| LoadingStage {
            until,
            message: message.to_string(),
        };
        Self {
            tick_ms: 100,
            min_step: 5.0,
            max_step: 20.0,
            hide_delay_ms: 1000,
            stages: vec![
                stage(20.0, "Initializing..."),
                stage(40.0, "Loading assets..."),
                stage(60.0, "Setting up interface..."),
                stage(90.0, "Almost ready..."),
                stage(100.0, "Welcome!"),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Particles per container.
    pub count: usize,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self { count: 50 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Entrance delay added per position in the visible sequence.
    pub stagger_ms: u32,
    pub search_debounce_ms: u32,
    pub articles_page_size: usize,
    pub articles_policy: CategoryMatch,
    pub projects_policy: CategoryMatch,
    pub certificates_policy: CategoryMatch,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 100,
            search_debounce_ms: 300,
            articles_page_size: 6,
            articles_policy: CategoryMatch::Exact,
            projects_policy: CategoryMatch::AnyOf,
            certificates_policy: CategoryMatch::AnyOf,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationsConfig {
    pub lifetime_ms: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { lifetime_ms: 5000 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormsConfig {
    /// Simulated network latency of a submission.
    pub submit_delay_ms: u32,
    /// How long the "Message Sent!" label stays before the form resets.
    pub sent_hold_ms: u32,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            sent_hold_ms: 2000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CursorConfig {
    /// The custom cursor is only enabled on viewports wider than this.
    pub min_viewport_px: f64,
    pub hover_scale: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            min_viewport_px: 768.0,
            hover_scale: 1.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TransitionConfig {
    /// Overlay time before navigating to the certificates page.
    pub navigate_after_ms: u32,
    pub overlay_ms: u32,
    pub brief_ms: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            navigate_after_ms: 2500,
            overlay_ms: 3000,
            brief_ms: 1000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub navbar_offset_px: f64,
    pub back_to_top_px: f64,
    /// Parallax speed of the first hero shape; each next shape adds the same.
    pub parallax_step: f64,
    /// A section counts as current this far before its top edge.
    pub section_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_offset_px: 50.0,
            back_to_top_px: 300.0,
            parallax_step: 0.5,
            section_offset_px: 100.0,
        }
    }
}

/// Parse a TOML site configuration.
pub fn load_site_config(src: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(src)?;
    if config.loading.max_step <= 0.0 {
        anyhow::bail!(
            "loading.max_step must be positive, got {}",
            config.loading.max_step
        );
    }
    if config.loading.min_step > config.loading.max_step {
        anyhow::bail!(
            "loading.min_step ({}) exceeds loading.max_step ({})",
            config.loading.min_step,
            config.loading.max_step
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = load_site_config("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.particles.count, 50);
        assert_eq!(config.catalog.articles_page_size, 6);
        assert_eq!(config.typewriter.phrases.len(), 5);
    }

    #[test]
    fn test_partial_override() {
        let config = load_site_config(
            r#"
[catalog]
articles_page_size = 9
certificates_policy = "substring"

[typewriter]
phrases = ["Rustacean"]
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.articles_page_size, 9);
        assert_eq!(config.catalog.certificates_policy, CategoryMatch::Substring);
        assert_eq!(config.catalog.projects_policy, CategoryMatch::AnyOf);
        assert_eq!(config.catalog.stagger_ms, 100);
        assert_eq!(config.typewriter.phrases, vec!["Rustacean".to_string()]);
        assert_eq!(config.typewriter.type_ms, 100);
    }

    #[test]
    fn test_loading_stages_table() {
        let config = load_site_config(
            r#"
[[loading.stages]]
until = 50.0
message = "Half"

[[loading.stages]]
until = 100.0
message = "Done"
"#,
        )
        .unwrap();
        assert_eq!(config.loading.stages.len(), 2);
        assert_eq!(config.loading.tick_ms, 100);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(load_site_config("[catalog]\narticles_policy = \"fuzzy\"").is_err());
        assert!(load_site_config("[loading]\nmin_step = 30.0\nmax_step = 10.0").is_err());
        assert!(load_site_config("not toml at all [").is_err());
    }

    #[test]
    fn test_loading_progress_must_advance() {
        assert!(load_site_config("[loading]\nmin_step = 0.0\nmax_step = 0.0").is_err());
        assert!(load_site_config("[loading]\nmin_step = -5.0\nmax_step = -1.0").is_err());
        let config = load_site_config("[loading]\nmin_step = 0.0\nmax_step = 1.0").unwrap();
        assert_eq!(config.loading.max_step, 1.0);
    }
}
