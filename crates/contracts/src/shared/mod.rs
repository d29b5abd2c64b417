pub mod catalog;
pub mod config;
pub mod effects;
pub mod error;
pub mod notification;
pub mod theme;
pub mod validation;
