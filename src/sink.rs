//! Content sinks: files, the clipboard, and standard output.
//!
//! File writes that would destroy existing data ask for confirmation
//! through the [`Console`] unless the caller passes `force`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::clipboard::ClipboardBackend;
use crate::console::Console;
use crate::error::{Error, Result};
use crate::size::ByteSize;
use crate::source::regular_file_size;

/// How [`write_file`] treats an existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file, asking first if it has content.
    Overwrite,
    /// Add to the end, separated from existing content by one newline.
    Append,
}

/// Write `bytes` to `path`.
///
/// Returns the number of payload bytes written (an append separator is
/// not counted). A declined overwrite returns [`Error::UserCancelled`]
/// and leaves the file untouched.
pub fn write_file(
    console: &mut Console<'_>,
    path: &Path,
    bytes: &[u8],
    mode: WriteMode,
    force: bool,
) -> Result<usize> {
    let existing = existing_size(path);

    if mode == WriteMode::Overwrite && !force {
        match existing {
            Some(0) => console.note(&format!(
                "Note: File '{}' exists but is empty. Proceeding.",
                path.display()
            )),
            Some(size) => {
                console.warn(&format!(
                    "Warning: File '{}' already exists ({}).",
                    path.display(),
                    ByteSize(size)
                ));
                if !console.confirm("Do you want to overwrite it?", true) {
                    return Err(Error::UserCancelled);
                }
            }
            None => {}
        }
    }

    ensure_parent_dir(path);

    let write = |file: &mut File| -> io::Result<()> {
        if mode == WriteMode::Append && existing.unwrap_or(0) > 0 {
            file.write_all(b"\n")?;
        }
        file.write_all(bytes)?;
        file.flush()
    };

    let mut file = match mode {
        WriteMode::Overwrite => File::create(path),
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
    }
    .map_err(|e| Error::write_failed(path, e))?;

    write(&mut file).map_err(|e| Error::write_failed(path, e))?;

    tracing::debug!("{:?} {} bytes to {}", mode, bytes.len(), path.display());
    Ok(bytes.len())
}

/// Put `bytes` on the clipboard.
pub fn write_clipboard(clipboard: &dyn ClipboardBackend, bytes: &[u8]) -> Result<()> {
    clipboard.set_text(bytes)?;
    tracing::debug!("wrote {} bytes to clipboard", bytes.len());
    Ok(())
}

/// Write `bytes` verbatim. A closed pipe on the other end is not an error.
pub fn write_stdout(out: &mut dyn Write, bytes: &[u8]) -> Result<()> {
    match out.write_all(bytes).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::write_failed("standard output", e)),
    }
}

/// Truncate a regular file to zero length.
///
/// Returns the number of bytes freed. Already-empty files succeed without
/// a prompt.
pub fn clear_file(console: &mut Console<'_>, path: &Path, force: bool) -> Result<u64> {
    let size = regular_file_size(path)?;

    if size == 0 {
        console.note(&format!("File '{}' is already empty.", path.display()));
        return Ok(0);
    }

    if !force {
        console.warn(&format!(
            "Warning: This will delete all content from '{}' ({}).",
            path.display(),
            ByteSize(size)
        ));
        if !console.confirm("Do you want to continue?", true) {
            return Err(Error::UserCancelled);
        }
    }

    File::create(path).map_err(|e| Error::write_failed(path, e))?;

    console.note(&format!(
        "All content successfully deleted from '{}'",
        path.display()
    ));
    console.note(&format!("Bytes freed: {}", ByteSize(size)));
    Ok(size)
}

/// Size of an existing regular file, or `None` if there is none.
fn existing_size(path: &Path) -> Option<u64> {
    fs::metadata(path)
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.len())
}

/// Create the immediate parent directory if it is missing.
///
/// Only one level is created; a deeper missing path makes the following
/// open fail with the real error.
fn ensure_parent_dir(path: &Path) {
    let Some(parent) = path.parent() else {
        return;
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return;
    }
    match fs::create_dir(parent) {
        Ok(()) => tracing::debug!("created directory {}", parent.display()),
        Err(e) => tracing::debug!("could not create {}: {}", parent.display(), e),
    }
}
