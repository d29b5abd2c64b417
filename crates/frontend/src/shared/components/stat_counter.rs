use crate::shared::effects::observe_once;
use contracts::shared::effects::CounterAnimation;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Span;
use leptos::prelude::*;
use leptos::task::spawn_local;

const COUNTER_DURATION_MS: u32 = 2000;
const COUNTER_FRAME_MS: u32 = 16;

/// Number that counts up from zero the first time it scrolls into view.
#[component]
pub fn StatCounter(
    target: u64,
    #[prop(into)] label: String,
    #[prop(optional, into)] suffix: String,
) -> impl IntoView {
    let node = NodeRef::<Span>::new();
    let value = RwSignal::new(0u64);
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);
        observe_once(&el, None, move || spawn_local(run_counter(target, value)));
    });

    view! {
        <div class="stat-item">
            <span class="stat-number" node_ref=node>
                {move || format!("{}{}", value.get(), suffix)}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

async fn run_counter(target: u64, value: RwSignal<u64>) {
    let mut animation = CounterAnimation::new(target, COUNTER_DURATION_MS, COUNTER_FRAME_MS);
    loop {
        let (current, done) = animation.step();
        value.set(current);
        if done {
            break;
        }
        TimeoutFuture::new(COUNTER_FRAME_MS).await;
    }
}
