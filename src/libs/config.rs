//! Configuration for the todo2org command-line shell.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory resolved by [`DataStorage`]:
//!
//! - **Linux**: `$HOME/.local/share/todo2org/config.json`
//! - **macOS**: `$HOME/Library/Application Support/todo2org/config.json`
//! - **Windows**: `%LOCALAPPDATA%\todo2org\config.json`
//!
//! A missing file means defaults. Missing fields in an existing file also
//! fall back to their defaults, so older files keep loading.
//!
//! Only the shell is configurable; the converters themselves have no
//! settings and always produce the same output for the same input.
//!
//! ```rust,no_run
//! use todo2org::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.overwrite = false;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Replace output files that already exist.
    ///
    /// On by default: converting `todo.txt` again simply refreshes
    /// `todo.org`. When off, existing outputs are reported as errors unless
    /// `--force` is given.
    pub overwrite: bool,

    /// Print the summary table after converting a batch of files.
    pub summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            overwrite: true,
            summary: true,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = Self::path()?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }
}
