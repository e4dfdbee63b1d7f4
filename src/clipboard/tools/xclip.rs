//! Linux xclip clipboard tool.

use super::{capture, pipe_into, program_exists};
use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::ClipboardMethod;

/// What xclip prints when the selection holds nothing.
const EMPTY_MARKERS: &[&str] = &[
    "target STRING not available",
    "target UTF8_STRING not available",
];

/// Linux X11 clipboard tool using xclip.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xclip {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && program_exists("xclip")
    }

    fn try_set(&self, text: &[u8]) -> Result<(), ToolError> {
        pipe_into("xclip", &["-selection", "clipboard"], text)
    }

    fn try_get(&self) -> Result<Vec<u8>, ToolError> {
        capture("xclip", &["-selection", "clipboard", "-o"], EMPTY_MARKERS)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
