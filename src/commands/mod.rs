//! Operation handlers for the copycat CLI.
//!
//! Each submodule handles one route through the tool. [`run`] picks
//! exactly one of them based on the resolved [`Options`].

pub mod copy;
pub mod delete;
pub mod paste;
pub mod stdin;

use std::io::Read;

use crate::clipboard::ClipboardBackend;
use crate::console::Console;
use crate::error::Result;
use crate::options::{Mode, Options};
use crate::sink::WriteMode;

/// Per-invocation collaborators the handlers run against.
pub struct Context<'a> {
    pub clipboard: &'a dyn ClipboardBackend,
    pub console: Console<'a>,
    /// Content source for the stdin route.
    pub stdin: &'a mut dyn Read,
    pub stdin_is_terminal: bool,
    /// Ceiling for copy-mode file reads, already resolved from flags and config.
    pub max_file_size: u64,
}

/// Run the single operation described by `options`.
pub fn run(options: &Options, ctx: &mut Context<'_>) -> Result<()> {
    if takes_stdin_route(options, ctx.stdin_is_terminal) {
        tracing::debug!("route: stdin");
        return stdin::handle(options, ctx);
    }

    tracing::debug!("route: {:?}", options.mode);
    match options.mode {
        Mode::Delete => delete::handle(options, ctx),
        Mode::Paste => paste::handle(options, ctx),
        Mode::Copy => copy::handle(options, ctx),
    }
}

/// Whether standard input is the content source.
///
/// Either asked for explicitly, or implied by piped input when nothing
/// else was named: copy mode without a target.
pub fn takes_stdin_route(options: &Options, stdin_is_terminal: bool) -> bool {
    options.use_stdin
        || (!stdin_is_terminal && options.target.is_none() && options.mode == Mode::Copy)
}

/// File write mode selected by `--append`.
fn write_mode(options: &Options) -> WriteMode {
    if options.append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    }
}
