//! Chef Menu - restaurant menu management
//!
//! # Module structure
//!
//! ```text
//! chef-menu/src/
//! ├── core/          # Config, application state
//! ├── services/      # Menu store, session, course filter, seed menu
//! ├── console/       # Line-oriented front end
//! └── utils/         # Logging, validation
//! ```
//!
//! The data model and the pure menu functions live in `menu_shared`.

pub mod console;
pub mod core;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{AppState, Config, HomeSummary, IdStrategy};
pub use crate::services::{CourseFilter, FilterDraft, MenuStore, Session};
pub use crate::utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use crate::utils::logger::{cleanup_old_logs, init_logger_with_file};
