use crate::config::site_config;
use crate::shared::dom;
use contracts::shared::effects::{LoadingFrame, LoadingProgress};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fade-out length of the `.loading-screen.hidden` transition in `site.css`.
const FADE_MS: u32 = 500;

/// Full-screen loader shown until the fake progress reaches 100%.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let config = site_config().loading.clone();
    let tick_ms = config.tick_ms;
    let hide_delay_ms = config.hide_delay_ms;

    let mut progress = LoadingProgress::new(config);
    let frame = RwSignal::new(progress.frame());
    let hidden = RwSignal::new(false);
    let removed = RwSignal::new(false);

    spawn_local(async move {
        loop {
            TimeoutFuture::new(tick_ms).await;
            let next = progress.advance(dom::random());
            let done = next.done;
            frame.set(next);
            if done {
                break;
            }
        }
        log::debug!("Loading complete");
        TimeoutFuture::new(hide_delay_ms).await;
        hidden.set(true);
        TimeoutFuture::new(FADE_MS).await;
        removed.set(true);
    });

    view! {
        <Show when=move || !removed.get()>
            <div class="loading-screen" class:hidden=move || hidden.get()>
                <div class="loading-content">
                    <div class="loading-logo">"Portfolio"</div>
                    <div class="loading-bar">
                        <div
                            class="loading-progress"
                            style=move || frame.with(|f: &LoadingFrame| format!("width: {}%;", f.width))
                        ></div>
                    </div>
                    <div class="loading-percentage">
                        {move || format!("{}%", frame.with(|f| f.percent))}
                    </div>
                    <div class="loading-text">{move || frame.with(|f| f.message.clone())}</div>
                </div>
            </div>
        </Show>
    }
}
