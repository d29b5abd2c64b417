use crate::config::site_config;
use crate::shared::dom;
use contracts::shared::effects::cursor::{cursor_enabled, cursor_transforms};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Elements that enlarge the cursor while hovered.
const INTERACTIVE: &str = "a, button, input, textarea, .card-animated, .filter-btn";

/// Dot and follower cursor. Not rendered on narrow viewports.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let config = site_config().cursor.clone();
    if !cursor_enabled(dom::viewport_width(), &config) {
        return ().into_any();
    }

    let dot = RwSignal::new(String::new());
    let follower = RwSignal::new(String::new());

    if let Some(body) = dom::body() {
        let _ = body.class_list().add_1("custom-cursor");
    }

    let _ = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        let hovering = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
            .is_some();
        let (d, f) = cursor_transforms(ev.client_x() as f64, ev.client_y() as f64, hovering, &config);
        dot.set(d);
        follower.set(f);
    });

    view! {
        <div class="cursor" style=move || format!("transform: {};", dot.get())></div>
        <div class="cursor-follower" style=move || format!("transform: {};", follower.get())></div>
    }
    .into_any()
}
