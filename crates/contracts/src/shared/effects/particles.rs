/// Placement and timing of one floating particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleStyle {
    /// Build from four uniform samples in `[0, 1)`.
    pub fn from_samples([left, top, delay, duration]: [f64; 4]) -> Self {
        Self {
            left_pct: left.clamp(0.0, 1.0) * 100.0,
            top_pct: top.clamp(0.0, 1.0) * 100.0,
            delay_s: delay.clamp(0.0, 1.0) * 6.0,
            duration_s: duration.clamp(0.0, 1.0) * 4.0 + 4.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        let low = ParticleStyle::from_samples([0.0; 4]);
        assert_eq!(low.duration_s, 4.0);
        assert_eq!(low.delay_s, 0.0);

        let high = ParticleStyle::from_samples([0.5, 0.25, 0.5, 1.0]);
        assert_eq!(high.left_pct, 50.0);
        assert_eq!(high.top_pct, 25.0);
        assert_eq!(high.delay_s, 3.0);
        assert_eq!(high.duration_s, 8.0);
    }

    #[test]
    fn test_css() {
        let p = ParticleStyle::from_samples([0.5, 0.25, 0.5, 0.5]);
        assert_eq!(
            p.css(),
            "left: 50.00%; top: 25.00%; animation-delay: 3.00s; animation-duration: 6.00s;"
        );
    }
}
