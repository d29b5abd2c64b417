//! Clock overlay shown while leaving for the certificates page.

use crate::config::site_config;
use crate::shared::dom;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct TransitionService {
    active: RwSignal<bool>,
}

impl TransitionService {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Show the overlay, navigate to `href` once it has played, then hide it
    /// in case the navigation did not unload the page.
    pub fn navigate(&self, href: String) {
        let cfg = site_config().transition.clone();
        let active = self.active;
        log::debug!("Transition to {}", href);
        active.set(true);
        spawn_local(async move {
            TimeoutFuture::new(cfg.navigate_after_ms).await;
            dom::navigate(&href);
            TimeoutFuture::new(cfg.overlay_ms.saturating_sub(cfg.navigate_after_ms)).await;
            active.set(false);
        });
    }

    /// Short flash of the overlay for in-page jumps.
    pub fn brief(&self) {
        let brief_ms = site_config().transition.brief_ms;
        let active = self.active;
        active.set(true);
        spawn_local(async move {
            TimeoutFuture::new(brief_ms).await;
            active.set(false);
        });
    }
}

impl Default for TransitionService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_transition() -> TransitionService {
    use_context::<TransitionService>().expect("TransitionService not provided in context (provide it in app root)")
}

#[component]
pub fn TransitionOverlay() -> impl IntoView {
    let transition = use_transition();

    view! {
        <div class="certificate-transition" class:active=move || transition.is_active() aria-hidden="true">
            <div class="clock-container">
                <div class="clock-face">
                    <div class="hour-hand"></div>
                    <div class="minute-hand"></div>
                    <div class="second-hand"></div>
                    <div class="center-dot"></div>
                </div>
            </div>
            <div class="transition-text">
                "My " <span class="gradient-text">"Certificates"</span>
            </div>
        </div>
    }
}
