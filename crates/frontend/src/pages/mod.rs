//! Page shells. One bundle serves every HTML page; `Page::detect` picks
//! the body to mount.

pub mod articles;
pub mod certificates;
pub mod index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Certificates,
    Articles,
}

impl Page {
    /// Resolve from the `<body data-page>` marker, falling back to the path.
    pub fn from_marker(marker: Option<&str>, path: &str) -> Self {
        match marker.map(|m| m.trim().to_ascii_lowercase()).as_deref() {
            Some("index") | Some("home") => return Page::Index,
            Some("certificates") => return Page::Certificates,
            Some("articles") => return Page::Articles,
            _ => {}
        }
        let file = path.rsplit('/').next().unwrap_or("");
        if file.starts_with("certificates") {
            Page::Certificates
        } else if file.starts_with("articles") {
            Page::Articles
        } else {
            Page::Index
        }
    }

    pub fn detect() -> Self {
        let window = web_sys::window();
        let marker = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-page"));
        let path = window
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let page = Self::from_marker(marker.as_deref(), &path);
        log::debug!("Page detected: {:?} (marker {:?}, path {})", page, marker, path);
        page
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Certificates => "certificates.html",
            Page::Articles => "articles.html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_wins_over_path() {
        assert_eq!(Page::from_marker(Some("articles"), "/certificates.html"), Page::Articles);
        assert_eq!(Page::from_marker(Some(" Certificates "), "/"), Page::Certificates);
    }

    #[test]
    fn test_path_fallback() {
        assert_eq!(Page::from_marker(None, "/certificates.html"), Page::Certificates);
        assert_eq!(Page::from_marker(None, "/site/articles.html"), Page::Articles);
        assert_eq!(Page::from_marker(None, "/"), Page::Index);
        assert_eq!(Page::from_marker(Some("unknown"), "/index.html"), Page::Index);
    }
}
