pub mod footer;
pub mod global_context;
pub mod navbar;

use crate::shared::effects::{BackToTop, CustomCursor, Particles, TransitionOverlay};
use crate::shared::notifications::NotificationHost;
use leptos::prelude::*;

/// Chrome shared by every page.
///
/// ```text
/// +------------------------------------------+
/// |                 Navbar                   |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
/// plus the fixed overlays: particles, cursor, toasts, back-to-top and the
/// page-transition clock.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <Particles />
        <CustomCursor />
        <navbar::Navbar />
        <main class="site-main">
            {children()}
        </main>
        <footer::Footer />
        <BackToTop />
        <NotificationHost />
        <TransitionOverlay />
    }
}
