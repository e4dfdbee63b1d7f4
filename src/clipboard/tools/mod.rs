//! Platform clipboard tools and the process plumbing they share.

mod pbcopy;
mod windows;
mod wl_clipboard;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use windows::WindowsClipboard;
pub use wl_clipboard::WlClipboard;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::{self, Write};
use std::process::{Command, Stdio};

use super::tool::{ClipboardTool, ToolError};

/// Tools for the current platform, in the order they should be tried.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
            Box::new(WlClipboard::new()),
        ]
    }

    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pbcopy::new())]
    }

    #[cfg(windows)]
    {
        vec![Box::new(WindowsClipboard::new())]
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
    {
        Vec::new()
    }
}

/// Check whether a program is on `PATH`.
pub(crate) fn program_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn spawn_error(program: &str, e: io::Error) -> ToolError {
    if e.kind() == io::ErrorKind::NotFound {
        ToolError::NotFound
    } else {
        ToolError::Failed(format!("{}: {}", program, e))
    }
}

/// Run `program` with `input` on its stdin.
///
/// Output streams go to `/dev/null`: X11 tools fork a daemon that keeps
/// serving the selection, and a captured pipe would never reach EOF.
pub(crate) fn pipe_into(program: &str, args: &[&str], input: &[u8]) -> Result<(), ToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input)
            .map_err(|e| ToolError::Failed(format!("{}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| ToolError::Failed(format!("{}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed(format!("{} exited with {}", program, status)))
    }
}

/// Run `program` and capture its stdout.
///
/// A non-zero exit whose stderr contains one of `empty_markers` is how
/// some tools report an empty clipboard; that becomes an empty result.
pub(crate) fn capture(
    program: &str,
    args: &[&str],
    empty_markers: &[&str],
) -> Result<Vec<u8>, ToolError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if output.status.success() {
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if is_empty_clipboard(&stderr, empty_markers) {
        return Ok(Vec::new());
    }

    Err(ToolError::Failed(format!(
        "{} exited with {}: {}",
        program,
        output.status,
        stderr.trim()
    )))
}

fn is_empty_clipboard(stderr: &str, empty_markers: &[&str]) -> bool {
    empty_markers.iter().any(|marker| stderr.contains(marker))
}
