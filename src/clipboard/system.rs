//! Clipboard orchestrator over the platform tools.

use super::tool::{ClipboardTool, ToolError};
use super::tools::platform_tools;
use super::{ClipboardBackend, ClipboardError, ClipboardMethod};

/// Orchestrates clipboard operations using available tools.
///
/// Tools are tried in order. Unavailable or missing tools are skipped,
/// a failing tool is logged and the next one is tried. Only when every
/// tool has been exhausted does an operation fail.
pub struct Clipboard {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl Clipboard {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    /// Platform tools, with `preferred` moved to the front when present.
    pub fn with_preference(preferred: Option<ClipboardMethod>) -> Self {
        let mut clipboard = Self::new();
        if let Some(method) = preferred {
            clipboard.prefer(method);
        }
        clipboard
    }

    /// Move the tool for `method` to the front of the order.
    pub fn prefer(&mut self, method: ClipboardMethod) {
        if let Some(pos) = self.tools.iter().position(|t| t.method() == method) {
            let tool = self.tools.remove(pos);
            self.tools.insert(0, tool);
        } else {
            tracing::warn!("preferred clipboard tool {} is not offered on this platform", method);
        }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn ClipboardTool>] {
        &self.tools
    }

    /// Put `text` on the clipboard, returning the tool that did it.
    pub fn set(&self, text: &[u8]) -> Result<ClipboardMethod, ClipboardError> {
        self.first_success("set", |tool| tool.try_set(text))
            .map(|(method, ())| method)
    }

    /// Read the clipboard, returning the tool that did it.
    pub fn get(&self) -> Result<(ClipboardMethod, Vec<u8>), ClipboardError> {
        self.first_success("get", |tool| tool.try_get())
    }

    fn first_success<T>(
        &self,
        operation: &str,
        mut attempt: impl FnMut(&dyn ClipboardTool) -> Result<T, ToolError>,
    ) -> Result<(ClipboardMethod, T), ClipboardError> {
        let mut last_error: Option<String> = None;

        for tool in &self.tools {
            if !tool.is_available() {
                tracing::debug!("clipboard: {} not available, skipping", tool.name());
                continue;
            }

            match attempt(tool.as_ref()) {
                Ok(value) => {
                    tracing::debug!("clipboard: {} via {}", operation, tool.name());
                    return Ok((tool.method(), value));
                }
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(msg)) => {
                    tracing::warn!(
                        "clipboard: {} {} failed ({}), trying next tool",
                        tool.name(),
                        operation,
                        msg
                    );
                    last_error = Some(msg);
                }
            }
        }

        if let Some(err) = last_error {
            tracing::debug!("clipboard: all tools failed, last error: {}", err);
        }

        Err(ClipboardError::NoToolAvailable)
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardBackend for Clipboard {
    fn set_text(&self, text: &[u8]) -> Result<(), ClipboardError> {
        self.set(text).map(|_| ())
    }

    fn get_text(&self) -> Result<Vec<u8>, ClipboardError> {
        self.get().map(|(_, text)| text)
    }
}
