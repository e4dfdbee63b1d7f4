//! Clipboard operation errors.

/// Install hint shown when no clipboard tool works.
#[cfg(target_os = "linux")]
const INSTALL_HINT: &str = "Install 'xclip', 'xsel' or 'wl-clipboard' (e.g. sudo apt-get install xclip).";
#[cfg(target_os = "macos")]
const INSTALL_HINT: &str = "pbcopy/pbpaste should be available on every macOS install.";
#[cfg(windows)]
const INSTALL_HINT: &str = "The built-in clip.exe and PowerShell should be available.";
#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
const INSTALL_HINT: &str = "Clipboard access is not supported on this platform.";

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. {}", INSTALL_HINT)]
    NoToolAvailable,

    #[error("Unknown clipboard tool '{0}'. Expected one of: xclip, xsel, wl-clipboard, pbcopy, windows")]
    UnknownTool(String),
}
