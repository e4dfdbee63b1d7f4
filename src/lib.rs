//! copycat library
//!
//! Moves text between files, the system clipboard, and standard
//! input/output, with optional first-N / last-N line windows and
//! confirmation before anything is overwritten.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod console;
pub mod content;
pub mod error;
pub mod logging;
pub mod options;
pub mod prompt;
pub mod sink;
pub mod size;
pub mod source;
pub mod theme;
pub mod window;

pub use clipboard::{Clipboard, ClipboardBackend, ClipboardError, ClipboardMethod};
pub use commands::{run, Context};
pub use config::Config;
pub use console::Console;
pub use content::Content;
pub use error::{Error, Result};
pub use options::{Mode, Options};
pub use size::{format_size, ByteSize};
pub use theme::Theme;
