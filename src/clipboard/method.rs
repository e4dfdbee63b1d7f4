//! Identifiers for the clipboard helper programs.

use std::fmt;

use super::ClipboardError;

/// Which helper program handled a clipboard operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMethod {
    Xclip,
    Xsel,
    WlClipboard,
    Pbcopy,
    Windows,
}

impl ClipboardMethod {
    /// Name used in logs and in the `clipboard.tool` config key.
    pub fn name(&self) -> &'static str {
        match self {
            ClipboardMethod::Xclip => "xclip",
            ClipboardMethod::Xsel => "xsel",
            ClipboardMethod::WlClipboard => "wl-clipboard",
            ClipboardMethod::Pbcopy => "pbcopy",
            ClipboardMethod::Windows => "windows",
        }
    }

    /// Parse a tool name as written in the config file.
    pub fn from_name(name: &str) -> Result<Self, ClipboardError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "xclip" => Ok(ClipboardMethod::Xclip),
            "xsel" => Ok(ClipboardMethod::Xsel),
            "wl-clipboard" | "wl-copy" | "wayland" => Ok(ClipboardMethod::WlClipboard),
            "pbcopy" | "pbpaste" => Ok(ClipboardMethod::Pbcopy),
            "windows" | "clip" => Ok(ClipboardMethod::Windows),
            _ => Err(ClipboardError::UnknownTool(name.to_string())),
        }
    }
}

impl fmt::Display for ClipboardMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
