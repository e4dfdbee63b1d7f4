//! Content sources: files, the clipboard, and standard input.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::clipboard::ClipboardBackend;
use crate::content::Content;
use crate::error::{Error, Result};
use crate::size::ByteSize;

/// Default ceiling for file reads (100 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Chunk size used when draining standard input.
const STDIN_CHUNK: usize = 64 * 1024;

/// Look up a path that must be an existing regular file.
///
/// Returns the file size. Symlinks are followed.
pub fn regular_file_size(path: &Path) -> Result<u64> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(Error::read_failed(format!("'{}'", path.display()), e)),
    };

    if !metadata.is_file() {
        return Err(Error::NotRegularFile {
            path: path.to_path_buf(),
        });
    }

    Ok(metadata.len())
}

/// Read a whole file.
///
/// The size is checked against `max_size` before anything is read.
pub fn read_file(path: &Path, max_size: u64) -> Result<Content> {
    let size = regular_file_size(path)?;
    if size > max_size {
        return Err(Error::TooLarge {
            path: path.to_path_buf(),
            size: ByteSize(size),
            max: ByteSize(max_size),
        });
    }

    let what = || format!("'{}'", path.display());
    let mut file = File::open(path).map_err(|e| Error::read_failed(what(), e))?;
    let mut bytes = buffer_for(size).map_err(|e| Error::read_failed(what(), e))?;
    file.read_to_end(&mut bytes)
        .map_err(|e| Error::read_failed(what(), e))?;

    tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(Content::new(bytes))
}

/// Read the clipboard. An empty clipboard is a valid, empty result.
pub fn read_clipboard(clipboard: &dyn ClipboardBackend) -> Result<Content> {
    let bytes = clipboard.get_text()?;
    tracing::debug!("read {} bytes from clipboard", bytes.len());
    Ok(Content::new(bytes))
}

/// Drain a reader (normally stdin) to end of stream.
///
/// The buffer at least doubles whenever it runs out of room.
pub fn read_stdin(reader: &mut dyn Read) -> Result<Content> {
    let mut bytes: Vec<u8> = Vec::new();
    let mut chunk = vec![0u8; STDIN_CHUNK];

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::read_failed("standard input", e)),
        };

        if bytes.len() + n > bytes.capacity() {
            grow(&mut bytes, n);
        }
        bytes.extend_from_slice(&chunk[..n]);
    }

    tracing::debug!("read {} bytes from stdin", bytes.len());
    Ok(Content::new(bytes))
}

/// Allocate room for a whole file up front, failing instead of aborting.
fn buffer_for(size: u64) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    usize::try_from(size)
        .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))
        .and_then(|size| {
            bytes
                .try_reserve_exact(size)
                .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))
        })?;
    Ok(bytes)
}

/// Make room for `additional` more bytes, at least doubling the capacity.
fn grow(bytes: &mut Vec<u8>, additional: usize) {
    let target = (bytes.capacity() * 2)
        .max(bytes.len() + additional)
        .max(STDIN_CHUNK);
    bytes.reserve_exact(target - bytes.len());
}
