//! Content Remixer - Rust Backend Library
//!
//! This library provides the backend for the Content Remixer application.
//! It includes:
//! - HTTP route handlers for the browser client
//! - Business logic services (generation fan-out, templates, results, OAuth)
//! - Storage layer (SQLite, config, credentials)
//! - Data models and utilities

pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use models::response::*;
pub use models::settings::{AppConfig, SettingsUpdate};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
