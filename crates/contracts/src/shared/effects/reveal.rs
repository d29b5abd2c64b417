/// When an element counts as "in view" for a one-shot reveal.
///
/// The bottom margin shrinks the viewport so the effect starts once the
/// element is a little way up from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction of the element, `0.0..=1.0`.
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl RevealOptions {
    /// `.fade-in` blocks.
    pub const FADE_IN: Self = Self {
        threshold: 0.1,
        bottom_margin_px: 50,
    };

    /// Skill bars wait until half the bar is on screen.
    pub const SKILL_BAR: Self = Self {
        threshold: 0.5,
        bottom_margin_px: 100,
    };

    /// `rootMargin` value for an `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            "0px".to_string()
        } else {
            format!("0px 0px -{}px 0px", self.bottom_margin_px)
        }
    }

    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            0.0
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }
}

/// Latch for effects that play once: the first intersection fires,
/// later ones are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one observer report; true only for the report that reveals.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margins() {
        assert_eq!(RevealOptions::FADE_IN.root_margin(), "0px 0px -50px 0px");
        assert_eq!(RevealOptions::SKILL_BAR.root_margin(), "0px 0px -100px 0px");
        let flush = RevealOptions {
            threshold: 0.0,
            bottom_margin_px: 0,
        };
        assert_eq!(flush.root_margin(), "0px");
    }

    #[test]
    fn test_threshold_clamped() {
        let over = RevealOptions {
            threshold: 1.7,
            bottom_margin_px: 0,
        };
        assert_eq!(over.clamped_threshold(), 1.0);
        assert_eq!(RevealOptions::SKILL_BAR.clamped_threshold(), 0.5);
    }

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
    }
}
