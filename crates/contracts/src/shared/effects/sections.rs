//! Which page section the reader is looking at, for the navbar highlight.

/// Document-space geometry of one `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let top = self.top - offset;
        scroll_y >= top && scroll_y < top + self.height
    }
}

/// Section whose band `[top - offset, top - offset + height)` holds the
/// scroll offset. When bands overlap the later section wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y, offset))
        .map(|section| section.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("projects", 1400.0, 1200.0),
            SectionBounds::new("contact", 2600.0, 500.0),
        ]
    }

    #[test]
    fn test_section_at_offset() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 699.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 700.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 1350.0, 100.0), Some("projects"));
        assert_eq!(active_section(&sections, 2550.0, 100.0), Some("contact"));
    }

    #[test]
    fn test_past_last_section() {
        let sections = page();
        assert_eq!(active_section(&sections, 3000.0, 100.0), None);
        assert_eq!(active_section(&[], 0.0, 100.0), None);
    }

    #[test]
    fn test_overlap_prefers_later_section() {
        let sections = vec![
            SectionBounds::new("hero", 0.0, 1000.0),
            SectionBounds::new("intro", 500.0, 300.0),
        ];
        assert_eq!(active_section(&sections, 450.0, 100.0), Some("intro"));
        assert_eq!(active_section(&sections, 850.0, 100.0), Some("hero"));
    }
}
