//! Utilities: logging and input validation

pub mod logger;
pub mod validation;

pub use menu_shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
