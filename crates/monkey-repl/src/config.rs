//! Configuration for the `monkey-repl` binary.
//!
//! Ambient convenience only - nothing here affects lexing or parsing
//! semantics (§6). Follows the teacher CLI's search-path and
//! load/save conventions, trimmed to the REPL's small settings surface.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{ReplError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "monkey.toml";

/// REPL configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Suppress ANSI color in the error banner.
    #[serde(default)]
    pub no_color: bool,

    /// Path to a file that persists REPL input lines across sessions.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the default search path, or defaults if none
    /// is found: current directory, then `$HOME/.config/monkey`, then the
    /// platform config directory.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReplError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ReplError::ConfigParse(e.to_string()))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("monkey").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("monkey").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
