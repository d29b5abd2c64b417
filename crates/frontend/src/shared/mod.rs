pub mod catalog_view;
pub mod components;
pub mod dom;
pub mod effects;
pub mod icons;
pub mod list_utils;
pub mod notifications;
pub mod submit;
pub mod theme;
