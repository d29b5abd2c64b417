//! Window-level error reporting.
//!
//! Uncaught script errors and unhandled promise rejections are logged and
//! otherwise ignored; the page keeps handling input.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

pub fn install() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
        log::error!(
            "Script error: {} ({}:{}:{})",
            event.message(),
            event.filename(),
            event.lineno(),
            event.colno()
        );
    }) as Box<dyn FnMut(_)>);

    let on_rejection = Closure::wrap(Box::new(move |event: PromiseRejectionEvent| {
        log::error!("Unhandled promise rejection: {:?}", event.reason());
    }) as Box<dyn FnMut(_)>);

    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback(
        "unhandledrejection",
        on_rejection.as_ref().unchecked_ref(),
    );

    // Listeners live for the whole page.
    on_error.forget();
    on_rejection.forget();
}
