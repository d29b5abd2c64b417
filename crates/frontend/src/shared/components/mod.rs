pub mod card_animated;
pub mod filter_tabs;
pub mod load_more;
pub mod skill_bar;
pub mod stat_counter;

pub use card_animated::CardAnimated;
pub use filter_tabs::FilterTabs;
pub use load_more::LoadMoreButton;
pub use skill_bar::SkillBar;
pub use stat_counter::StatCounter;
