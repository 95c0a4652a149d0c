//! Seed menu
//!
//! The menu the app starts with: either the built-in one or a JSON array of
//! menu items read from disk.

use menu_shared::models::{BEVERAGES, BURGERS, DESSERT, PIZZA};
use menu_shared::{AppError, AppResult, ErrorCode, MenuItem};
use std::path::Path;

/// Built-in menu
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            1,
            "Classic Burger",
            "Juicy beef patty with fresh toppings",
            BURGERS,
            89.99,
        ),
        MenuItem::new(2, "Margherita Pizza", "Fresh mozzarella and basil", PIZZA, 109.99),
        MenuItem::new(
            3,
            "Chocolate Lava Cake",
            "Warm chocolate cake with molten center",
            DESSERT,
            65.00,
        ),
        MenuItem::new(4, "Coca Cola", "Refreshing cold beverage", BEVERAGES, 25.00),
    ]
}

/// Read a JSON array of menu items
pub fn load_seed(path: &Path) -> AppResult<Vec<MenuItem>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_message(
            ErrorCode::SeedLoadFailed,
            format!("Failed to read {}: {e}", path.display()),
        )
    })?;
    let items: Vec<MenuItem> = serde_json::from_str(&raw).map_err(|e| {
        AppError::with_message(
            ErrorCode::SeedLoadFailed,
            format!("Invalid menu file {}: {e}", path.display()),
        )
    })?;
    tracing::info!(path = %path.display(), count = items.len(), "Seed menu loaded");
    Ok(items)
}

/// Seed file if one is configured, otherwise the built-in menu
pub fn load_or_default(path: Option<&Path>) -> AppResult<Vec<MenuItem>> {
    match path {
        Some(path) => load_seed(path),
        None => Ok(default_menu()),
    }
}
