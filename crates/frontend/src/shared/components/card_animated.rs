//! CardAnimated: thaw `Card` with the `card-appear` entrance and a click ripple.
//!
//! The keyframes live in `style/site.css`. Grids pass a growing `delay_ms`
//! per card for the staggered entrance:
//!
//! ```text
//! <CardAnimated delay_ms=0>   // first visible card
//! <CardAnimated delay_ms=100> // second
//! ```

use contracts::shared::effects::Ripple;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Card;

const RIPPLE_MS: u32 = 600;

/// Entrance delay for the card at `position` in the visible sequence.
///
/// With paging, positions restart on every revealed page so newly loaded
/// cards do not wait behind the ones already shown.
pub fn stagger_delay(position: usize, page_size: Option<usize>, stagger_ms: u32) -> u32 {
    let slot = match page_size {
        Some(size) if size > 0 => position % size,
        _ => position,
    };
    (slot as u32).saturating_mul(stagger_ms)
}

#[component]
pub fn CardAnimated(
    /// Entrance delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)] class: String,
    /// Spawn a ripple at the click position.
    #[prop(optional)]
    ripple: bool,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };
    let wrapper_class = if class.is_empty() {
        "card-animated".to_string()
    } else {
        format!("card-animated {}", class)
    };

    let node = NodeRef::<Div>::new();
    let ripples = RwSignal::new(Vec::<(u64, Ripple)>::new());
    let next_id = StoredValue::new(0u64);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !ripple {
            return;
        }
        let Some(el) = node.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let r = Ripple::at(
            ev.client_x() as f64,
            ev.client_y() as f64,
            (rect.left(), rect.top(), rect.width(), rect.height()),
        );
        let id = next_id.get_value();
        next_id.set_value(id + 1);
        ripples.update(|list| list.push((id, r)));
        spawn_local(async move {
            TimeoutFuture::new(RIPPLE_MS).await;
            ripples.update(|list| list.retain(|(rid, _)| *rid != id));
        });
    };

    view! {
        <div class=wrapper_class style=full_style node_ref=node on:click=on_click>
            <Card>
                {children()}
            </Card>
            <For
                each=move || ripples.get()
                key=|(id, _)| *id
                children=|(_, r)| view! { <span class="ripple" style=r.css()></span> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_without_paging() {
        assert_eq!(stagger_delay(0, None, 100), 0);
        assert_eq!(stagger_delay(3, None, 100), 300);
    }

    #[test]
    fn test_stagger_restarts_per_page() {
        assert_eq!(stagger_delay(5, Some(6), 100), 500);
        assert_eq!(stagger_delay(6, Some(6), 100), 0);
        assert_eq!(stagger_delay(8, Some(6), 100), 200);
    }

    #[test]
    fn test_zero_page_size_is_unpaged() {
        assert_eq!(stagger_delay(7, Some(0), 10), 70);
    }
}
