use crate::shared::config::CursorConfig;

/// Half sizes of the cursor dot and its follower, in px.
const DOT_OFFSET: f64 = 10.0;
const FOLLOWER_OFFSET: f64 = 20.0;

pub fn cursor_enabled(viewport_width: f64, config: &CursorConfig) -> bool {
    viewport_width > config.min_viewport_px
}

/// `transform` values of the dot and the follower for a mouse position.
pub fn cursor_transforms(client_x: f64, client_y: f64, hovering: bool, config: &CursorConfig) -> (String, String) {
    let scale = if hovering { config.hover_scale } else { 1.0 };
    let place = |offset: f64| {
        format!(
            "translate({}px, {}px) scale({})",
            client_x - offset,
            client_y - offset,
            scale
        )
    };
    (place(DOT_OFFSET), place(FOLLOWER_OFFSET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_only_on_wide_viewports() {
        let config = CursorConfig::default();
        assert!(!cursor_enabled(768.0, &config));
        assert!(cursor_enabled(1024.0, &config));
    }

    #[test]
    fn test_transforms() {
        let config = CursorConfig::default();
        let (dot, follower) = cursor_transforms(100.0, 50.0, false, &config);
        assert_eq!(dot, "translate(90px, 40px) scale(1)");
        assert_eq!(follower, "translate(80px, 30px) scale(1)");
        let (dot, _) = cursor_transforms(100.0, 50.0, true, &config);
        assert_eq!(dot, "translate(90px, 40px) scale(1.5)");
    }
}
