//! Data models
//!
//! Shared between the menu store and any front end.
//! All IDs are `i64`.

pub mod course;
pub mod menu_item;

// Re-exports
pub use course::*;
pub use menu_item::*;
