//! The search preferences record and its JSON file store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

const DEFAULT_PAGE_SIZE: u32 = 20;

/// Preferences error type.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("could not determine a config directory")]
    NoConfigDir,
    #[error("preferences file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid preferences in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode preferences: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Relevance,
    Newest,
    Oldest,
}

/// Search preferences owned by the host.
///
/// The search bar only ever reads `query`; the other fields belong to
/// sibling controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub query: String,
    pub sort: SortOrder,
    pub include_archived: bool,
    pub page_size: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortOrder::default(),
            include_archived: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Preferences {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Loads and saves [`Preferences`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config location.
    pub fn default_location() -> Result<Self, PreferencesError> {
        paths::preferences_file()
            .map(Self::new)
            .ok_or(PreferencesError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record. A missing file yields the defaults.
    pub fn load(&self) -> Result<Preferences, PreferencesError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no preferences at {}, using defaults", self.path.display());
                return Ok(Preferences::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let prefs = serde_json::from_slice(&bytes).map_err(|source| PreferencesError::Decode {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("loaded preferences from {}", self.path.display());
        Ok(prefs)
    }

    /// Write the record, creating parent directories as needed.
    pub fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_vec_pretty(prefs).map_err(PreferencesError::Encode)?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        log::debug!("saved preferences to {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> PreferencesError {
        PreferencesError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
