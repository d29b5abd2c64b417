//! Common types and traits for all catalog entries

pub mod catalog_entry;
pub mod item_id;

// Re-exports
pub use catalog_entry::CatalogEntry;
pub use item_id::ItemId;
