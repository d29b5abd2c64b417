use crate::shared::config::ScrollConfig;

/// Scroll-dependent chrome state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollState {
    pub fn from_offset(scroll_y: f64, config: &ScrollConfig) -> Self {
        Self {
            navbar_scrolled: scroll_y > config.navbar_offset_px,
            back_to_top_visible: scroll_y > config.back_to_top_px,
        }
    }
}

/// Vertical translation of the `index`-th hero shape.
pub fn parallax_offset(scroll_y: f64, index: usize, config: &ScrollConfig) -> f64 {
    scroll_y * (index as f64 + 1.0) * config.parallax_step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        let config = ScrollConfig::default();
        assert_eq!(ScrollState::from_offset(0.0, &config), ScrollState::default());
        assert_eq!(
            ScrollState::from_offset(50.0, &config),
            ScrollState::default()
        );
        assert_eq!(
            ScrollState::from_offset(51.0, &config),
            ScrollState {
                navbar_scrolled: true,
                back_to_top_visible: false
            }
        );
        assert!(ScrollState::from_offset(301.0, &config).back_to_top_visible);
    }

    #[test]
    fn test_parallax() {
        let config = ScrollConfig::default();
        assert_eq!(parallax_offset(100.0, 0, &config), 50.0);
        assert_eq!(parallax_offset(100.0, 2, &config), 150.0);
    }
}
