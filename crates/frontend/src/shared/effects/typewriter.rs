use crate::config::site_config;
use contracts::shared::effects::Typewriter;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cycles through the configured phrases, typing and deleting them.
#[component]
pub fn TypewriterText() -> impl IntoView {
    let text = RwSignal::new(String::new());
    let alive = Arc::new(AtomicBool::new(true));

    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let mut typewriter = Typewriter::new(site_config().typewriter.clone());
    spawn_local(async move {
        // Let the loading screen go first.
        TimeoutFuture::new(1000).await;
        while alive.load(Ordering::Relaxed) {
            let frame = typewriter.tick();
            text.set(frame.text);
            TimeoutFuture::new(frame.next_delay_ms).await;
        }
    });

    view! {
        <span class="typing-text">{move || text.get()}</span>
        <span class="typing-cursor" aria-hidden="true">"|"</span>
    }
}
