//! Decorative effects. Each component drives one state machine from
//! `contracts::shared::effects` with browser timers and events.

pub mod cursor;
pub mod easter_egg;
pub mod loading_screen;
pub mod page_transition;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod typewriter;

pub use cursor::CustomCursor;
pub use easter_egg::KonamiListener;
pub use loading_screen::LoadingScreen;
pub use page_transition::{use_transition, TransitionOverlay, TransitionService};
pub use particles::Particles;
pub use reveal::{observe_once, FadeIn};
pub use scroll::{provide_scroll_context, use_scroll, BackToTop, Parallax, ScrollContext};
pub use typewriter::TypewriterText;
