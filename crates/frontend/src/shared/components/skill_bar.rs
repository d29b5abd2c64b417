use crate::shared::effects::observe_once;
use contracts::shared::effects::{RevealOptions, SkillLevel};
use leptos::html::Div;
use leptos::prelude::*;

/// Labelled progress bar that fills to its level once half of it is on screen.
#[component]
pub fn SkillBar(#[prop(into)] name: String, level: SkillLevel) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let filled = RwSignal::new(false);
    let observing = StoredValue::new(false);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if observing.get_value() {
            return;
        }
        observing.set_value(true);
        observe_once(&el, Some(RevealOptions::SKILL_BAR), move || filled.set(true));
    });

    view! {
        <div class="skill-item">
            <div class="skill-info">
                <span class="skill-name">{name}</span>
                <span class="skill-percent">{format!("{}%", level.percent())}</span>
            </div>
            <div class="skill-progress" data-width=level.percent().to_string() node_ref=node>
                <div
                    class="progress-fill"
                    style=move || format!("width: {};", level.bar_width(filled.get()))
                ></div>
            </div>
        </div>
    }
}
