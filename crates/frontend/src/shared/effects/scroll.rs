use crate::config::site_config;
use crate::shared::dom;
use crate::shared::icons::icon;
use contracts::shared::effects::scroll::parallax_offset;
use contracts::shared::effects::{active_section, ScrollState};
use leptos::prelude::*;

/// Window scroll offset shared by the navbar, back-to-top and parallax
/// layers, plus the `section[id]` currently under the navbar.
#[derive(Clone, Copy)]
pub struct ScrollContext {
    y: RwSignal<f64>,
    section: RwSignal<Option<String>>,
}

impl ScrollContext {
    pub fn y(&self) -> f64 {
        self.y.get()
    }

    pub fn state(&self) -> ScrollState {
        ScrollState::from_offset(self.y.get(), &site_config().scroll)
    }

    pub fn with_active_section<R>(&self, f: impl FnOnce(Option<&str>) -> R) -> R {
        self.section.with(|section| f(section.as_deref()))
    }

    fn refresh(&self) {
        let y = dom::scroll_y();
        self.y.set(y);

        let sections = dom::section_bounds();
        let current = active_section(&sections, y, site_config().scroll.section_offset_px);
        if self.section.with_untracked(|s| s.as_deref() != current) {
            self.section.set(current.map(str::to_string));
        }
    }
}

/// Install the single window scroll listener. Call once at the app root.
pub fn provide_scroll_context() -> ScrollContext {
    let ctx = ScrollContext {
        y: RwSignal::new(dom::scroll_y()),
        section: RwSignal::new(None),
    };
    let _ = window_event_listener(leptos::ev::scroll, move |_| ctx.refresh());
    // Sections mount after this runs; pick the first one up once they exist.
    Effect::new(move |_| ctx.refresh());
    provide_context(ctx);
    ctx
}

pub fn use_scroll() -> ScrollContext {
    use_context::<ScrollContext>().expect("ScrollContext not provided in context (call provide_scroll_context in app root)")
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = use_scroll();

    view! {
        <button
            id="back-to-top"
            class="back-to-top"
            class:visible=move || scroll.state().back_to_top_visible
            aria-label="Back to top"
            on:click=move |_| dom::smooth_scroll_to(0.0)
        >
            {icon("arrow-up")}
        </button>
    }
}

/// Layer that drifts with the scroll offset; deeper `index` moves faster.
#[component]
pub fn Parallax(index: usize, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let scroll = use_scroll();
    let step_cfg = site_config().scroll.clone();
    let layer_class = if class.is_empty() {
        "parallax".to_string()
    } else {
        format!("parallax {}", class)
    };

    view! {
        <div
            class=layer_class
            style=move || format!("transform: translateY({}px);", parallax_offset(scroll.y(), index, &step_cfg))
        >
            {children()}
        </div>
    }
}
