//! macOS pasteboard tool (`pbcopy` / `pbpaste`).

use super::{capture, pipe_into};
use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::ClipboardMethod;

/// macOS clipboard via pbcopy and pbpaste, which ship with the OS.
pub struct Pbcopy;

impl Pbcopy {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Pbcopy {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Pbcopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_set(&self, text: &[u8]) -> Result<(), ToolError> {
        pipe_into("pbcopy", &[], text)
    }

    fn try_get(&self) -> Result<Vec<u8>, ToolError> {
        capture("pbpaste", &[], &[])
    }
}

impl Default for Pbcopy {
    fn default() -> Self {
        Self::new()
    }
}
