//! Storage Layer
//!
//! Handles all data persistence: SQLite database, credential file, and JSON config.

pub mod config;
pub mod credentials;
pub mod database;

pub use config::*;
pub use credentials::*;
pub use database::*;
