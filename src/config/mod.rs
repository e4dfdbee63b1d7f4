//! Configuration management for copycat

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::clipboard::ClipboardMethod;

impl Config {
    /// Get the config file path (~/.config/copycat/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/copycat)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.limits.max_file_size == 0 {
            return Err("limits.max_file_size must be greater than 0".to_string());
        }
        if let Some(ref tool) = self.clipboard.tool {
            ClipboardMethod::from_name(tool).map_err(|e| format!("clipboard.tool: {}", e))?;
        }
        Ok(())
    }

    /// The configured clipboard tool, if any.
    ///
    /// Unknown names are rejected by [`Config::validate`], so this only
    /// returns `None` when nothing is configured.
    pub fn preferred_tool(&self) -> Option<ClipboardMethod> {
        self.clipboard
            .tool
            .as_deref()
            .and_then(|name| ClipboardMethod::from_name(name).ok())
    }

    /// File-size ceiling for copy reads: `--max-size` wins over the config.
    pub fn max_file_size(&self, cli_override: Option<u64>) -> u64 {
        cli_override.unwrap_or(self.limits.max_file_size)
    }
}
