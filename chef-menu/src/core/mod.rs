//! Configuration and application state

pub mod config;
pub mod state;

pub use config::{Config, IdStrategy};
pub use state::{AppState, HomeSummary};
