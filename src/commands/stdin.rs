//! Stdin route: piped input to stdout, a file, or the clipboard.

use crate::error::Result;
use crate::options::{Mode, Options};
use crate::sink::{self, WriteMode};
use crate::source;

use super::{write_mode, Context};

/// Read all of stdin and deliver it to the first matching destination.
pub fn handle(options: &Options, ctx: &mut Context<'_>) -> Result<()> {
    let mut content = source::read_stdin(ctx.stdin)?;
    if options.strip_trailing_newline {
        content.strip_trailing_newlines();
    }

    if options.use_stdout {
        return sink::write_stdout(ctx.console.writer(), content.as_bytes());
    }

    let file_target = options
        .target
        .as_deref()
        .filter(|_| options.mode == Mode::Paste || options.append);

    if let Some(path) = file_target {
        let mode = write_mode(options);
        let written = sink::write_file(
            &mut ctx.console,
            path,
            content.as_bytes(),
            mode,
            options.force,
        )?;
        let verb = match mode {
            WriteMode::Append => "Appended",
            WriteMode::Overwrite => "Written",
        };
        ctx.console.note(&format!(
            "{} {} bytes to '{}'",
            verb,
            written,
            path.display()
        ));
        return Ok(());
    }

    sink::write_clipboard(ctx.clipboard, content.as_bytes())?;
    ctx.console.success(&format!(
        "Copied {} bytes from stdin to clipboard",
        content.len()
    ));
    Ok(())
}
