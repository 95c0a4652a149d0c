//! Application state
//!
//! One `AppState` per running app. It owns the menu, the login session and
//! the course filter; front ends hold it and call into it explicitly.

use crate::audit_log;
use crate::core::Config;
use crate::services::{CourseFilter, FilterDraft, MenuStore, Session, seed};
use menu_shared::{
    AppError, AppResult, AveragePrice, MenuItem, MenuItemForm, filter_menu_items,
};

/// What the home screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSummary {
    pub greeting: String,
    /// Number of items passing the course filter
    pub total_items: usize,
    pub items: Vec<MenuItem>,
}

#[derive(Debug)]
pub struct AppState {
    config: Config,
    store: MenuStore,
    session: Session,
    filter: CourseFilter,
}

impl AppState {
    /// Build state from config: load the seed menu and select all courses
    pub fn initialize(config: Config) -> AppResult<Self> {
        let items = seed::load_or_default(config.menu_file.as_deref())?;
        let store = MenuStore::new(items, config.id_strategy)?;
        Ok(Self::with_store(config, store))
    }

    /// Build state around an existing store
    pub fn with_store(config: Config, store: MenuStore) -> Self {
        let filter = CourseFilter::new(config.courses.clone());
        let state = Self {
            config,
            store,
            session: Session::new(),
            filter,
        };
        for item in state.store.list() {
            state.warn_unknown_course(&item.course);
        }
        state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn login(&mut self, username: &str) -> AppResult<()> {
        self.session.login(username)
    }

    // =========================================================================
    // Home
    // =========================================================================

    /// Menu items passing the current course filter
    pub fn home_items(&self) -> Vec<MenuItem> {
        filter_menu_items(&self.store.list(), self.filter.selected())
    }

    /// Greeting plus filtered items; requires login
    pub fn home_summary(&self) -> AppResult<HomeSummary> {
        let greeting = self
            .session
            .greeting()
            .ok_or_else(AppError::not_authenticated)?;
        let items = self.home_items();
        Ok(HomeSummary {
            greeting,
            total_items: items.len(),
            items,
        })
    }

    pub fn average_prices(&self) -> Vec<AveragePrice> {
        self.store.average_prices()
    }

    // =========================================================================
    // Filter
    // =========================================================================

    pub fn filter(&self) -> &CourseFilter {
        &self.filter
    }

    pub fn filter_draft(&self) -> FilterDraft {
        self.filter.draft()
    }

    pub fn apply_filter(&mut self, draft: FilterDraft) {
        self.filter.apply(draft);
    }

    // =========================================================================
    // Management
    // =========================================================================

    /// Blank "add item" form
    pub fn new_item_form(&self) -> MenuItemForm {
        MenuItemForm::new_default(self.config.default_course())
    }

    /// "Edit item" form prefilled from the stored item
    pub fn edit_form(&self, id: i64) -> AppResult<MenuItemForm> {
        self.session.require_user()?;
        self.store
            .get(id)
            .map(|item| MenuItemForm::from_item(&item))
            .ok_or_else(|| AppError::menu_item_not_found(id))
    }

    pub fn create_item(&self, form: &MenuItemForm) -> AppResult<MenuItem> {
        let user = self.session.require_user()?;
        let item = self.store.create(form)?;
        self.warn_unknown_course(&item.course);
        audit_log!(user, "create", format!("menu_item:{}", item.id), &item.name);
        Ok(item)
    }

    pub fn update_item(&self, id: i64, form: &MenuItemForm) -> AppResult<MenuItem> {
        let user = self.session.require_user()?;
        let item = self.store.update(id, form)?;
        self.warn_unknown_course(&item.course);
        audit_log!(user, "update", format!("menu_item:{id}"), &item.name);
        Ok(item)
    }

    /// Delete an item; confirmation is up to the caller
    pub fn delete_item(&self, id: i64) -> AppResult<MenuItem> {
        let user = self.session.require_user()?;
        let item = self.store.remove(id)?;
        audit_log!(user, "delete", format!("menu_item:{id}"), &item.name);
        Ok(item)
    }

    fn warn_unknown_course(&self, course: &str) {
        if !self.config.courses.iter().any(|c| c == course) {
            tracing::warn!(
                course,
                "Course is not in the configured course list; it cannot be selected in the filter"
            );
        }
    }
}
