// Import necessary libraries and modules for file I/O and serialization.
use crate::catalog::Catalog;
use crate::error::{CreatorError, Result};
use crate::selection::DEFAULT_CHARACTER_NAME;
use crate::store::SelectionStore;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Configuration of the character creator, stored as JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub default_character_name: String, // Name restored by a reset.
    pub catalog_path: Option<PathBuf>,  // Custom catalog, the built-in one when absent.
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_character_name: DEFAULT_CHARACTER_NAME.to_string(),
            catalog_path: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    // Base directory for settings and logs: ~/portrait_forge
    pub fn base_dir() -> Result<PathBuf> {
        dir::home_dir()
            .map(|home| home.join("portrait_forge"))
            .ok_or_else(|| CreatorError::Settings("Failed to get home directory".to_string()))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("settings.json"))
    }

    // Load settings from the default path, falling back to defaults when none were saved.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_settings_from_file(path)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::default_path()?)
    }

    pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| CreatorError::Settings(format!("Invalid log level: {}", self.log_level)))
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::base_dir()?.join("data")),
        }
    }

    /// The configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        let catalog = match &self.catalog_path {
            Some(path) => Arc::new(Catalog::load_from_file(path)?),
            None => Catalog::builtin()?,
        };
        Ok(catalog)
    }

    pub fn new_store(&self) -> Result<SelectionStore> {
        Ok(SelectionStore::with_default_name(
            self.catalog()?,
            self.default_character_name.clone(),
        ))
    }
}
