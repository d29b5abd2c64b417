//! Deterministic state machines behind the decorative effects.
//!
//! Randomness and timers stay in the frontend: callers pass random samples
//! in and schedule the returned delays.

pub mod counter;
pub mod cursor;
pub mod konami;
pub mod loading;
pub mod particles;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod sections;
pub mod skill_bar;
pub mod typewriter;

pub use counter::CounterAnimation;
pub use konami::KonamiTracker;
pub use loading::{LoadingFrame, LoadingProgress};
pub use particles::ParticleStyle;
pub use reveal::{RevealLatch, RevealOptions};
pub use ripple::Ripple;
pub use scroll::ScrollState;
pub use sections::{active_section, SectionBounds};
pub use skill_bar::SkillLevel;
pub use typewriter::{Typewriter, TypewriterFrame};
