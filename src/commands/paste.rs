//! Paste command handler

use crate::error::Result;
use crate::options::Options;
use crate::sink::{self, WriteMode};
use crate::source;

use super::{write_mode, Context};

/// Write the clipboard to stdout, or to the target file.
pub fn handle(options: &Options, ctx: &mut Context<'_>) -> Result<()> {
    let content = source::read_clipboard(ctx.clipboard)?;
    if content.is_empty() {
        ctx.console.note("Clipboard is empty. Nothing to paste.");
        return Ok(());
    }

    let path = match options.target.as_deref() {
        Some(path) if !options.use_stdout => path,
        _ => return sink::write_stdout(ctx.console.writer(), content.as_bytes()),
    };

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
        WriteMode::Overwrite => "Pasted",
    };
    ctx.console.success(&format!(
        "{} {} bytes from clipboard to '{}'",
        verb,
        written,
        path.display()
    ));
    Ok(())
}
