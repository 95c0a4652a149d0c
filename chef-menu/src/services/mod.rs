//! Application services
//!
//! - [`MenuStore`]: authoritative menu with create/update/remove
//! - [`Session`]: login
//! - [`CourseFilter`] / [`FilterDraft`]: course allow-list for the home screen
//! - [`seed`]: initial menu

pub mod course_filter;
pub mod menu_store;
pub mod seed;
pub mod session;

pub use course_filter::{CourseFilter, FilterDraft};
pub use menu_store::MenuStore;
pub use session::Session;
