//! Windows clipboard tool (`clip.exe` / PowerShell `Get-Clipboard`).

use super::{capture, pipe_into};
use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::ClipboardMethod;

/// Windows clipboard using the built-in `clip` and PowerShell.
pub struct WindowsClipboard;

impl WindowsClipboard {
    pub fn new() -> Self {
        Self
    }

    /// PowerShell terminates its output with a line break of its own.
    pub fn strip_powershell_newline(mut output: Vec<u8>) -> Vec<u8> {
        if output.ends_with(b"\r\n") {
            output.truncate(output.len() - 2);
        } else if output.ends_with(b"\n") {
            output.truncate(output.len() - 1);
        }
        output
    }
}

impl ClipboardTool for WindowsClipboard {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Windows
    }

    fn is_available(&self) -> bool {
        cfg!(windows)
    }

    fn try_set(&self, text: &[u8]) -> Result<(), ToolError> {
        pipe_into("clip", &[], text)
    }

    fn try_get(&self) -> Result<Vec<u8>, ToolError> {
        capture(
            "powershell",
            &["-NoProfile", "-Command", "Get-Clipboard -Raw"],
            &[],
        )
        .map(Self::strip_powershell_newline)
    }
}

impl Default for WindowsClipboard {
    fn default() -> Self {
        Self::new()
    }
}
