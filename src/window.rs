//! Line windows: keep only the first or last N lines of content.
//!
//! Both functions return `None` for `n == 0`, meaning "leave the content
//! as it is". When the input has fewer than `n` lines the whole input is
//! returned.

use crate::content::Content;

/// Keep the first `n` lines, including the newline ending the n-th line.
pub fn first_lines(bytes: &[u8], n: usize) -> Option<Content> {
    if n == 0 {
        return None;
    }

    let end = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'\n')
        .nth(n - 1)
        .map(|(i, _)| i + 1)
        .unwrap_or(bytes.len());

    Some(Content::from(&bytes[..end]))
}

/// Keep the last `n` lines.
///
/// A newline terminating the final line does not start a new (empty)
/// line, so the last line of `"a\nb\n"` is `"b\n"`.
pub fn last_lines(bytes: &[u8], n: usize) -> Option<Content> {
    if n == 0 {
        return None;
    }

    let scan_end = match bytes.last() {
        Some(b'\n') => bytes.len() - 1,
        _ => bytes.len(),
    };

    let start = bytes[..scan_end]
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, b)| **b == b'\n')
        .nth(n - 1)
        .map(|(i, _)| i + 1)
        .unwrap_or(0);

    Some(Content::from(&bytes[start..]))
}
