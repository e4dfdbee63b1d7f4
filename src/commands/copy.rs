//! Copy command handler

use crate::content::Content;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::size::ByteSize;
use crate::window::{first_lines, last_lines};
use crate::{sink, source};

use super::Context;

/// Copy the target file, optionally windowed, to the clipboard or stdout.
///
/// Empty and oversized files ask before continuing unless forced. Saying
/// yes to an oversized file lifts the ceiling for this read; `--force`
/// only skips the question, so an oversized file still fails.
pub fn handle(options: &Options, ctx: &mut Context<'_>) -> Result<()> {
    let path = options.target.as_deref().ok_or_else(|| {
        Error::Usage("File name or input required for copy operation".to_string())
    })?;

    let size = source::regular_file_size(path)?;
    let mut ceiling = ctx.max_file_size;

    if !options.force {
        if size == 0 {
            ctx.console
                .warn(&format!("Warning: File '{}' is empty.", path.display()));
            if !ctx.console.confirm("Do you want to copy empty content?", true) {
                return Err(Error::UserCancelled);
            }
        } else if size > ceiling {
            ctx.console
                .warn(&format!("Warning: File is large ({}).", ByteSize(size)));
            if !ctx.console.confirm("Do you want to continue?", true) {
                return Err(Error::UserCancelled);
            }
            ceiling = size;
        }
    }

    let content = apply_window(source::read_file(path, ceiling)?, options);

    if options.use_stdout {
        return sink::write_stdout(ctx.console.writer(), content.as_bytes());
    }

    sink::write_clipboard(ctx.clipboard, content.as_bytes())?;
    ctx.console.success(&format!(
        "Copied {} bytes from '{}' to clipboard",
        content.len(),
        path.display()
    ));
    Ok(())
}

/// First-N takes precedence over last-N; neither set keeps everything.
fn apply_window(content: Content, options: &Options) -> Content {
    let windowed = if options.line_limit > 0 {
        first_lines(content.as_bytes(), options.line_limit)
    } else {
        last_lines(content.as_bytes(), options.tail_limit)
    };
    windowed.unwrap_or(content)
}
