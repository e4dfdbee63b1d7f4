//! Wayland clipboard tool (`wl-copy` / `wl-paste`).

use super::{capture, pipe_into, program_exists};
use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::ClipboardMethod;

const EMPTY_MARKERS: &[&str] = &["Nothing is copied", "No selection"];

/// Wayland clipboard via the wl-clipboard package.
///
/// Only offered inside a Wayland session.
pub struct WlClipboard;

impl WlClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for WlClipboard {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::WlClipboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("WAYLAND_DISPLAY").is_some()
            && program_exists("wl-copy")
    }

    fn try_set(&self, text: &[u8]) -> Result<(), ToolError> {
        pipe_into("wl-copy", &[], text)
    }

    fn try_get(&self) -> Result<Vec<u8>, ToolError> {
        capture("wl-paste", &["--no-newline"], EMPTY_MARKERS)
    }
}

impl Default for WlClipboard {
    fn default() -> Self {
        Self::new()
    }
}
