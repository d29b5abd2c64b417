//! Thin helpers over `web_sys` used across components.
//!
//! Every helper degrades to a no-op (or a neutral value) when the browser
//! object it needs is missing.

use contracts::shared::effects::SectionBounds;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

/// Uniform sample in `[0, 1)`.
pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth scroll to a section, leaving room for the fixed navbar.
pub fn scroll_to_section(id: &str) -> bool {
    const NAVBAR_HEIGHT: f64 = 80.0;

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let top = element.get_bounding_client_rect().top() + scroll_y() - NAVBAR_HEIGHT;
    smooth_scroll_to(top);
    true
}

/// Document-space bounds of every `section[id]`, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(nodes) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all("section[id]").ok())
    else {
        return Vec::new();
    };
    let offset = scroll_y();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            SectionBounds::new(el.id(), rect.top() + offset, rect.height())
        })
        .collect()
}

pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::error!("Navigation to {} failed: {:?}", href, e);
        }
    }
}

pub fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
}
