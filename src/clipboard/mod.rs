//! System clipboard access through external helper programs.
//!
//! Each platform exposes one or more command-line tools (`xclip`, `xsel`,
//! `wl-copy`/`wl-paste`, `pbcopy`/`pbpaste`, `clip`/PowerShell). The
//! [`Clipboard`] orchestrator tries them in priority order and falls back
//! to the next tool whenever one is missing or fails.
//!
//! # Example
//!
//! ```ignore
//! use copycat::clipboard::{Clipboard, ClipboardBackend};
//!
//! let clipboard = Clipboard::new();
//! clipboard.set_text(b"hello")?;
//! assert_eq!(clipboard.get_text()?, b"hello");
//! ```

mod error;
mod method;
pub mod system;
pub mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use method::ClipboardMethod;
pub use system::Clipboard;

/// Get/set access to a clipboard.
///
/// Content is raw bytes; helper programs receive and return exactly what
/// is passed through here.
pub trait ClipboardBackend {
    /// Replace the clipboard contents.
    fn set_text(&self, text: &[u8]) -> Result<(), ClipboardError>;

    /// Read the clipboard contents. An empty clipboard is `Ok(vec![])`.
    fn get_text(&self) -> Result<Vec<u8>, ClipboardError>;
}
