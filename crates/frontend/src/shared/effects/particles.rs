use crate::config::site_config;
use crate::shared::dom;
use contracts::shared::effects::ParticleStyle;
use leptos::prelude::*;

/// Floating background particles. Positions are drawn once per mount.
#[component]
pub fn Particles(#[prop(optional)] count: Option<usize>) -> impl IntoView {
    let count = count.unwrap_or(site_config().particles.count);
    let particles: Vec<ParticleStyle> = (0..count)
        .map(|_| ParticleStyle::from_samples([dom::random(), dom::random(), dom::random(), dom::random()]))
        .collect();

    view! {
        <div class="particles" aria-hidden="true">
            {particles
                .into_iter()
                .map(|p| view! { <div class="particle" style=p.css()></div> })
                .collect_view()}
        </div>
    }
}
