//! One-shot "scrolled into view" hooks over `IntersectionObserver`.

use contracts::shared::effects::{RevealLatch, RevealOptions};
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Run `on_reveal` the first time `element` intersects the viewport, then
/// stop observing. Without observer support it runs right away.
pub fn observe_once<F>(element: &Element, options: Option<RevealOptions>, on_reveal: F)
where
    F: Fn() + Clone + 'static,
{
    let fallback = on_reveal.clone();
    let mut latch = RevealLatch::default();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|e| {
                e.unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if latch.observe(visible) {
                observer.disconnect();
                on_reveal();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match options {
        Some(options) => {
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.clamped_threshold()));
            init.set_root_margin(&options.root_margin());
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };

    match observer {
        Ok(observer) => observer.observe(element),
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            fallback();
        }
    }
    callback.forget();
}

/// Block that fades in once it scrolls into view.
#[component]
pub fn FadeIn(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visible = RwSignal::new(false);
    let observing = StoredValue::new(false);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if observing.get_value() {
            return;
        }
        observing.set_value(true);
        observe_once(&el, Some(RevealOptions::FADE_IN), move || visible.set(true));
    });

    let class = if class.is_empty() {
        "fade-in".to_string()
    } else {
        format!("fade-in {}", class)
    };

    view! {
        <div class=class class:visible=move || visible.get() node_ref=node>
            {children()}
        </div>
    }
}
