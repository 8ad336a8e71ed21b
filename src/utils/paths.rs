//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories across platforms.
//! Everything the server persists lives under ~/.remixer/.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the remixer directory (~/.remixer/)
pub fn remixer_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".remixer"))
}

/// Get the settings file path (~/.remixer/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(remixer_dir()?.join("config.json"))
}

/// Get the template overrides file path (~/.remixer/templates.json)
pub fn templates_path() -> AppResult<PathBuf> {
    Ok(remixer_dir()?.join("templates.json"))
}

/// Get the credentials file path (~/.remixer/credentials.json)
pub fn credentials_path() -> AppResult<PathBuf> {
    Ok(remixer_dir()?.join("credentials.json"))
}

/// Get the database file path (~/.remixer/remixer.db)
pub fn database_path() -> AppResult<PathBuf> {
    Ok(remixer_dir()?.join("remixer.db"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the remixer directory, creating if it doesn't exist
pub fn ensure_remixer_dir() -> AppResult<PathBuf> {
    let path = remixer_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
