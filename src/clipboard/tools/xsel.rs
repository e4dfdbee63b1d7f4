//! Linux xsel clipboard tool.

use super::{capture, pipe_into, program_exists};
use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::ClipboardMethod;

/// Linux X11 clipboard tool using xsel.
///
/// xsel exits successfully with no output for an empty clipboard.
pub struct Xsel;

impl Xsel {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xsel {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Xsel
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && program_exists("xsel")
    }

    fn try_set(&self, text: &[u8]) -> Result<(), ToolError> {
        pipe_into("xsel", &["--clipboard", "--input"], text)
    }

    fn try_get(&self) -> Result<Vec<u8>, ToolError> {
        capture("xsel", &["--clipboard", "--output"], &[])
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
