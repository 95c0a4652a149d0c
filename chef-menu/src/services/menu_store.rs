//! Menu Store - the authoritative menu collection
//!
//! Owns the list of menu items for the session. Readers get snapshots;
//! all mutation goes through [`MenuStore::create`], [`MenuStore::update`]
//! and [`MenuStore::remove`], which validate the form first and leave the
//! menu untouched on error.

use crate::core::IdStrategy;
use crate::utils::validation::{ValidForm, validate_menu_form, validate_seed_item};
use menu_shared::util::snowflake_id;
use menu_shared::{AppError, AppResult, AveragePrice, MenuItem, MenuItemForm};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

/// Attempts at finding a free snowflake id before giving up
const MAX_ID_ATTEMPTS: usize = 16;

/// In-memory menu with explicit mutation operations
///
/// Cloning is cheap and clones share the same menu.
#[derive(Clone)]
pub struct MenuStore {
    /// Items in insertion order
    items: Arc<RwLock<Vec<MenuItem>>>,
    id_strategy: IdStrategy,
}

impl std::fmt::Debug for MenuStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuStore")
            .field("items_count", &self.items.read().len())
            .field("id_strategy", &self.id_strategy)
            .finish()
    }
}

impl MenuStore {
    /// Create a store from seed items
    ///
    /// Fails with `ValidationFailed` if an item has a blank name or course
    /// or a negative price, and with `MenuItemIdConflict` if two seed items
    /// share an id.
    pub fn new(items: Vec<MenuItem>, id_strategy: IdStrategy) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            validate_seed_item(item)?;
            if !seen.insert(item.id) {
                return Err(AppError::id_conflict(item.id));
            }
        }
        tracing::info!(count = items.len(), ?id_strategy, "MenuStore: loaded menu");
        Ok(Self {
            items: Arc::new(RwLock::new(items)),
            id_strategy,
        })
    }

    /// Empty store
    pub fn empty(id_strategy: IdStrategy) -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            id_strategy,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Snapshot of the whole menu, in insertion order
    pub fn list(&self) -> Vec<MenuItem> {
        self.items.read().clone()
    }

    pub fn get(&self, id: i64) -> Option<MenuItem> {
        self.items.read().iter().find(|item| item.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Average price per course over the current menu
    pub fn average_prices(&self) -> Vec<AveragePrice> {
        menu_shared::calculate_average_price_per_course(&self.items.read())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a new item from a form
    ///
    /// The new item gets a fresh id, `available = true`, and goes to the end
    /// of the menu.
    pub fn create(&self, form: &MenuItemForm) -> AppResult<MenuItem> {
        let ValidForm {
            name,
            description,
            course,
            price,
        } = validate_menu_form(form)?;

        let mut items = self.items.write();
        let id = self.next_id(&items)?;
        let item = MenuItem {
            id,
            name,
            description,
            course,
            price,
            available: true,
        };
        items.push(item.clone());

        tracing::info!(id, name = %item.name, course = %item.course, "Menu item created");
        Ok(item)
    }

    /// Replace name, description, course and price of an existing item
    ///
    /// `id`, `available` and the item's position are kept.
    pub fn update(&self, id: i64, form: &MenuItemForm) -> AppResult<MenuItem> {
        let valid = validate_menu_form(form)?;

        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::menu_item_not_found(id))?;

        item.name = valid.name;
        item.description = valid.description;
        item.course = valid.course;
        item.price = valid.price;

        tracing::info!(id, name = %item.name, "Menu item updated");
        Ok(item.clone())
    }

    /// Remove an item, returning it
    pub fn remove(&self, id: i64) -> AppResult<MenuItem> {
        let mut items = self.items.write();
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::menu_item_not_found(id))?;
        let removed = items.remove(index);

        tracing::info!(id, name = %removed.name, "Menu item removed");
        Ok(removed)
    }

    fn next_id(&self, items: &[MenuItem]) -> AppResult<i64> {
        match self.id_strategy {
            IdStrategy::Sequential => {
                let max = items.iter().map(|item| item.id).max().unwrap_or(0);
                max.checked_add(1)
                    .ok_or_else(|| AppError::internal("Menu item id space exhausted"))
            }
            IdStrategy::Snowflake => {
                for _ in 0..MAX_ID_ATTEMPTS {
                    let id = snowflake_id();
                    if items.iter().all(|item| item.id != id) {
                        return Ok(id);
                    }
                    tracing::debug!(id, "Snowflake id collision, retrying");
                }
                Err(AppError::internal("Could not allocate a unique menu item id"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_shared::ErrorCode;

    fn form(name: &str, course: &str, price: &str) -> MenuItemForm {
        MenuItemForm {
            name: name.into(),
            description: format!("{name} description"),
            course: course.into(),
            price: price.into(),
        }
    }

    fn seeded() -> MenuStore {
        MenuStore::new(
            vec![
                MenuItem::new(1, "Classic Burger", "Beef", "Burgers", 89.99),
                MenuItem::new(2, "Margherita Pizza", "Basil", "Pizza", 109.99),
            ],
            IdStrategy::Sequential,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = MenuStore::new(
            vec![
                MenuItem::new(1, "A", "a", "Pizza", 1.0),
                MenuItem::new(1, "B", "b", "Pizza", 2.0),
            ],
            IdStrategy::Sequential,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemIdConflict);
    }

    #[test]
    fn test_new_rejects_invalid_items() {
        let err = MenuStore::new(
            vec![
                MenuItem::new(1, "A", "a", "Pizza", 1.0),
                MenuItem::new(2, "", "b", "Pizza", -5.0),
            ],
            IdStrategy::Sequential,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap().get("id").unwrap(), 2);

        let free = MenuStore::new(
            vec![MenuItem::new(1, "Tap Water", "Still", "Beverages", 0.0)],
            IdStrategy::Sequential,
        )
        .unwrap();
        assert_eq!(free.average_prices()[0].average, 0.0);
    }

    #[test]
    fn test_create_appends_with_next_id() {
        let store = seeded();
        let item = store.create(&form("Coca Cola", "Beverages", "25")).unwrap();
        assert_eq!(item.id, 3);
        assert!(item.available);
        assert_eq!(item.price, 25.0);
        assert_eq!(store.list().last(), Some(&item));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_sequential_ids_are_not_reused_below_max() {
        let store = seeded();
        store.remove(1).unwrap();
        let item = store.create(&form("Tea", "Beverages", "10")).unwrap();
        assert_eq!(item.id, 3);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let store = MenuStore::empty(IdStrategy::Sequential);
        assert!(store.is_empty());
        assert_eq!(store.create(&form("Tea", "Beverages", "10")).unwrap().id, 1);
    }

    #[test]
    fn test_snowflake_ids_are_unique() {
        let store = MenuStore::empty(IdStrategy::Snowflake);
        let mut ids = HashSet::new();
        for i in 0..50 {
            let item = store.create(&form(&format!("Dish {i}"), "Pizza", "10")).unwrap();
            assert!(ids.insert(item.id));
        }
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn test_create_invalid_form_leaves_menu_untouched() {
        let store = seeded();
        let before = store.list();

        let err = store.create(&form("", "Pizza", "10")).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        let err = store.create(&form("Soup", "Pizza", "-1")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);

        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_update_keeps_identity_and_position() {
        let store = seeded();
        let updated = store.update(1, &form("Double Burger", "Burgers", "120.5")).unwrap();
        assert_eq!(updated.id, 1);
        assert!(updated.available);
        assert_eq!(updated.price, 120.5);

        let items = store.list();
        assert_eq!(items[0].name, "Double Burger");
        assert_eq!(items[1].name, "Margherita Pizza");
    }

    #[test]
    fn test_update_can_change_course() {
        let store = seeded();
        store.update(2, &form("Calzone", "Pizza Specials", "99")).unwrap();
        assert_eq!(store.get(2).unwrap().course, "Pizza Specials");
    }

    #[test]
    fn test_update_errors() {
        let store = seeded();
        let err = store.update(99, &form("X", "Pizza", "1")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);

        let before = store.list();
        let err = store.update(1, &form("X", "Pizza", "abc")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove() {
        let store = seeded();
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.name, "Classic Burger");
        assert!(store.get(1).is_none());
        assert_eq!(store.len(), 1);

        let err = store.remove(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    }

    #[test]
    fn test_average_prices() {
        let store = seeded();
        store.create(&form("Pepperoni", "Pizza", "90.01")).unwrap();
        let averages = store.average_prices();
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].course, "Burgers");
        assert_eq!(averages[1].course, "Pizza");
        assert!((averages[1].average - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_clones_share_menu() {
        let store = seeded();
        let other = store.clone();
        other.remove(2).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_debug_shows_count() {
        let debug = format!("{:?}", seeded());
        assert!(debug.contains("items_count: 2"));
    }
}
