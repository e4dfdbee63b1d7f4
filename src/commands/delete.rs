//! Delete command handler

use crate::error::{Error, Result};
use crate::options::Options;
use crate::sink;

use super::Context;

/// Truncate the target file to zero length.
pub fn handle(options: &Options, ctx: &mut Context<'_>) -> Result<()> {
    let path = options
        .target
        .as_deref()
        .ok_or_else(|| Error::Usage("File name required for delete operation".to_string()))?;

    sink::clear_file(&mut ctx.console, path, options.force)?;
    Ok(())
}
