//! Shared types for the chef menu
//!
//! The menu data model, the pure menu functions (average price per course,
//! course filtering), error types and small helpers.

pub mod error;
pub mod menu;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use menu::{calculate_average_price_per_course, filter_menu_items};
pub use models::{AveragePrice, MenuItem, MenuItemForm};
pub use serde::{Deserialize, Serialize};
