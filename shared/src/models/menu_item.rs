//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// One dish or beverage offered by the kitchen. `id` is the identity used
/// for edit/delete targeting and is unique within a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Course label (e.g. "Pizza"), free-form, compared case-sensitively
    pub course: String,
    pub price: f64,
    /// Set on creation, not changed by any menu operation
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            course: course.into(),
            price,
            available: true,
        }
    }
}

/// Average price of one course (derived, never stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AveragePrice {
    pub course: String,
    pub average: f64,
}

/// Create/update form payload
///
/// Mirrors the management form: every field is raw text, `price` is parsed
/// on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub course: String,
    pub price: String,
}

impl MenuItemForm {
    /// Blank form for a new item, preset to the given course
    pub fn new_default(course: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            ..Default::default()
        }
    }

    /// Form prefilled from an existing item (edit)
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            course: item.course.clone(),
            price: item.price.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_available() {
        let item = MenuItem::new(1, "Classic Burger", "Beef patty", "Burgers", 89.99);
        assert!(item.available);
        assert_eq!(item.course, "Burgers");
    }

    #[test]
    fn test_deserialize_defaults_available() {
        let json = r#"{"id":7,"name":"Tea","description":"Hot","course":"Beverages","price":12.5}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert!(item.available);
    }

    #[test]
    fn test_form_from_item() {
        let item = MenuItem::new(2, "Margherita Pizza", "Mozzarella", "Pizza", 109.99);
        let form = MenuItemForm::from_item(&item);
        assert_eq!(form.name, "Margherita Pizza");
        assert_eq!(form.price, "109.99");

        let form = MenuItemForm::new_default("Burgers");
        assert_eq!(form.course, "Burgers");
        assert!(form.name.is_empty());
        assert!(form.price.is_empty());
    }
}
