//! Resolved command-line options for one invocation.

use std::path::PathBuf;

/// Top-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// File (or piped input) to clipboard or stdout.
    #[default]
    Copy,
    /// Clipboard to file or stdout.
    Paste,
    /// Truncate a file.
    Delete,
}

/// Everything the driver needs to know about what was asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub append: bool,
    pub use_stdin: bool,
    pub use_stdout: bool,
    pub force: bool,
    pub strip_trailing_newline: bool,
    /// Accepted for compatibility; content is always handled as bytes.
    pub binary: bool,
    /// Keep only the first N lines (0 = off).
    pub line_limit: usize,
    /// Keep only the last N lines (0 = off). Ignored when `line_limit` is set.
    pub tail_limit: usize,
    /// Override for the file-size ceiling.
    pub max_size: Option<u64>,
    pub target: Option<PathBuf>,
}

impl Options {
    /// Options for `mode` with everything else off.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = Some(target.into());
        self
    }
}
