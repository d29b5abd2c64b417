//! Catalog filtering: the item model, the immutable catalog, the category and
//! search predicates and the engine composing them.

pub mod catalog;
pub mod content;
pub mod engine;
pub mod item;
pub mod predicates;

pub use catalog::{Catalog, CatalogLoad};
pub use engine::{recompute, FilterState, FilteringEngine, Visibility};
pub use item::Item;
pub use predicates::{category_tokens, matches_category, matches_query, CategoryMatch};

/// Filter value that disables the category axis. Never a legal item category.
pub const ALL_CATEGORIES: &str = "all";
