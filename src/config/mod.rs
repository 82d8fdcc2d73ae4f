//! Configuration module for people-search
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use crate::error::{Result, SearchError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "PEOPLE_SEARCH_SETTINGS_PATH";

/// Default locations searched for settings.yml, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("people-search/settings.yml"));
    }
    paths
}

/// Load settings from an explicit file, the settings env var, a default
/// location, or defaults, then merge environment overrides.
///
/// A file that was named explicitly (argument or env var) must exist.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(SETTINGS_PATH_ENV).ok().map(PathBuf::from));

    let mut settings = match named {
        Some(path) => {
            if !path.exists() {
                return Err(SearchError::config(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => match default_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                info!("Loading settings from: {}", path.display());
                Settings::from_file(&path)?
            }
            None => {
                info!("No settings file found, using defaults");
                Settings::default()
            }
        },
    };

    settings.merge_env();
    Ok(settings)
}
