//! Configuration management for todox.
//!
//! Settings live in a JSON file inside the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\todox\todox\config.json`
//! - **macOS**: `~/Library/Application Support/todox/todox/config.json`
//! - **Linux**: `~/.local/share/todox/todox/config.json`
//!
//! A missing file is not an error; [`Config::read`] falls back to defaults so
//! the tool works without any setup.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use todox::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.page_size = 20;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::todo::TodoFilter;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default number of records per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Application settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file override.
    ///
    /// When unset, the database lives next to the configuration file.
    pub database_path: Option<PathBuf>,

    /// Records per page for `list` when `--size` is not given.
    pub page_size: usize,

    /// Filter used by `list` and `count` when `--filter` is not given.
    pub default_filter: TodoFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            default_filter: TodoFilter::All,
        }
    }
}

impl Config {
    /// Reads configuration from the filesystem, returning defaults when no
    /// file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        self.validate()?;
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Resolved database location.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Runs the interactive setup wizard, starting from the current settings.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let page_size: usize = Input::with_theme(&theme)
            .with_prompt(Message::PromptPageSize.to_string())
            .default(current.page_size)
            .validate_with(|value: &usize| if *value == 0 { Err(Message::InvalidPageSize.to_string()) } else { Ok(()) })
            .interact_text()?;

        let filters = [TodoFilter::All, TodoFilter::Open, TodoFilter::Expired, TodoFilter::Done];
        let default_index = filters.iter().position(|f| *f == current.default_filter).unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultFilter.to_string())
            .items(&filters.iter().map(|f| f.to_string()).collect::<Vec<_>>())
            .default(default_index)
            .interact()?;

        let database: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.database_path.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            database_path: if database.trim().is_empty() { None } else { Some(PathBuf::from(database.trim())) },
            page_size,
            default_filter: filters[selected],
        })
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            msg_bail_anyhow!(Message::InvalidPageSize);
        }
        Ok(())
    }
}
