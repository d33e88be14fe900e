use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::FilterState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ArcRaiderTiers";
const APP_NAME: &str = "ArcRaiderTiers";

/// Storage key for the filter selection.
pub const FILTERS_KEY: &str = "arcraider-filters";

fn filters_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(format!("{FILTERS_KEY}.json")))
}

/// Restores the saved filter selection, or all-zero defaults when nothing
/// usable is stored.
pub fn load_filters() -> FilterState {
    match filters_file() {
        Some(path) => load_filters_from(&path),
        None => {
            warn!("no config directory available; using default filters");
            FilterState::default()
        }
    }
}

pub fn load_filters_from(path: &Path) -> FilterState {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), %err, "no saved filters");
            return FilterState::default();
        }
    };

    match serde_json::from_str::<FilterState>(&data) {
        Ok(filters) => {
            let unparsable = filters.unparsable();
            if !unparsable.is_empty() {
                warn!(
                    stations = ?unparsable,
                    "saved filters contain non-numeric levels; those stations will not flag upgrades"
                );
            }
            filters
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "saved filters are corrupt; using defaults");
            FilterState::default()
        }
    }
}

pub fn save_filters(filters: &FilterState) -> Result<(), PersistSaveError> {
    let path = filters_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_filters_to(&path, filters)
}

pub fn save_filters_to(path: &Path, filters: &FilterState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(filters)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
