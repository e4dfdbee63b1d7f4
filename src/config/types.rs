//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::source::DEFAULT_MAX_FILE_SIZE;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Size limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest file (in bytes) that copy mode reads without asking
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

pub fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
        }
    }
}

/// Clipboard backend selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Helper tool to try first (xclip, xsel, wl-clipboard, pbcopy, windows)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
}
