use crate::shared::dom;
use crate::shared::notifications::use_notifications;
use contracts::shared::effects::KonamiTracker;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const RAINBOW_MS: u32 = 4000;

/// Listens for the Konami code; renders nothing.
#[component]
pub fn KonamiListener() -> impl IntoView {
    let notifications = use_notifications();
    let tracker = StoredValue::new(KonamiTracker::default());

    let _ = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        let mut t = tracker.get_value();
        let completed = t.push(&ev.key());
        tracker.set_value(t);
        if !completed {
            return;
        }

        log::info!("Konami code entered");
        let Some(body) = dom::body() else {
            return;
        };
        let _ = body.class_list().add_1("rainbow");
        spawn_local(async move {
            TimeoutFuture::new(RAINBOW_MS).await;
            let _ = body.class_list().remove_1("rainbow");
            notifications.success("🎉 You found the easter egg! 🎉");
        });
    });
}
