mod config;
pub mod database;

pub use config::{Config, StatsConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/atril[-dev]/` based on ATRIL_ENV.
///
/// Set ATRIL_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ATRIL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("atril-dev")
    } else {
        base_dir.join("atril")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
