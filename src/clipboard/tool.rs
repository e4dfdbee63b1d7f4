//! Trait implemented by each clipboard helper program.

use super::ClipboardMethod;

/// Why a single tool could not complete an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The tool cannot do this operation at all.
    NotSupported,
    /// The tool's program is not installed.
    NotFound,
    /// The program ran but failed.
    Failed(String),
}

/// A clipboard helper program.
pub trait ClipboardTool {
    /// Identifier of this tool.
    fn method(&self) -> ClipboardMethod;

    /// Whether the tool can be used on this machine right now.
    fn is_available(&self) -> bool;

    /// Put `text` on the clipboard.
    fn try_set(&self, text: &[u8]) -> Result<(), ToolError>;

    /// Read the clipboard.
    fn try_get(&self) -> Result<Vec<u8>, ToolError>;

    /// Display name, taken from the method by default.
    fn name(&self) -> &'static str {
        self.method().name()
    }
}
