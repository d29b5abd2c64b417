/// Proficiency shown by a skill bar, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    /// Levels above 100 are clamped.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    /// Parse a `data-width` style value such as `"85"` or `"85%"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw.strip_suffix('%').unwrap_or(raw).trim();
        let value: f64 = raw.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self::new(value.clamp(0.0, 100.0).round() as u8))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// CSS width of the bar: zero until it has scrolled into view.
    pub fn bar_width(self, filled: bool) -> String {
        if filled {
            format!("{}%", self.0)
        } else {
            "0%".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_fills_on_reveal() {
        let level = SkillLevel::new(85);
        assert_eq!(level.bar_width(false), "0%");
        assert_eq!(level.bar_width(true), "85%");
    }

    #[test]
    fn test_levels_clamp_to_full_bar() {
        assert_eq!(SkillLevel::new(140).percent(), 100);
        assert_eq!(SkillLevel::parse("120").map(SkillLevel::percent), Some(100));
        assert_eq!(SkillLevel::parse("-3").map(SkillLevel::percent), Some(0));
    }

    #[test]
    fn test_parse_data_width() {
        assert_eq!(SkillLevel::parse("90"), Some(SkillLevel::new(90)));
        assert_eq!(SkillLevel::parse(" 72.6% "), Some(SkillLevel::new(73)));
        assert_eq!(SkillLevel::parse(""), None);
        assert_eq!(SkillLevel::parse("wide"), None);
        assert_eq!(SkillLevel::parse("NaN"), None);
    }
}
