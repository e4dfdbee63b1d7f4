//! CLI definitions for copycat
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser};
use clap_complete::Shell as CompletionShell;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::options::{Mode, Options};

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, flag names (accent color)
/// - White: placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "copycat")]
#[command(about = "File/Clipboard/Pipe utility - copy, paste and clear text from the terminal")]
#[command(
    long_about = "copycat moves text between files, the system clipboard, and stdin/stdout.

By default the named file is copied to the clipboard. Piped input without a
file name is copied to the clipboard as well.

EXAMPLES:
    copycat notes.txt               Copy notes.txt to the clipboard
    copycat -l 10 server.log        Copy the first 10 lines
    copycat -t 20 -o server.log     Print the last 20 lines
    copycat -p out.txt              Paste the clipboard into out.txt
    copycat -p -a journal.txt       Append the clipboard to journal.txt
    copycat -d scratch.txt          Clear scratch.txt
    echo hi | copycat               Copy piped input to the clipboard
    echo hi | copycat -s -p a.txt   Write piped input to a.txt"
)]
#[command(after_help = "Exit Codes:
  0 - Success
  1 - Error
  2 - User cancelled")]
#[command(version = VERSION, disable_version_flag = true)]
#[command(args_override_self = true)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Copy file/content to clipboard (default)
    #[arg(short = 'c', long, overrides_with_all = ["paste", "delete"], help_heading = "Operations")]
    pub copy: bool,

    /// Paste clipboard to file (or stdout if no file)
    #[arg(short = 'p', long, overrides_with_all = ["copy", "delete"], help_heading = "Operations")]
    pub paste: bool,

    /// Delete file content
    #[arg(short = 'd', long, overrides_with_all = ["copy", "paste"], help_heading = "Operations")]
    pub delete: bool,

    /// Append to file instead of overwriting
    #[arg(short = 'a', long, help_heading = "Operations")]
    pub append: bool,

    /// Read from stdin (pipe)
    #[arg(short = 's', long, help_heading = "Operations")]
    pub stdin: bool,

    /// Output to stdout
    #[arg(short = 'o', long, help_heading = "Operations")]
    pub stdout: bool,

    /// Force operation without confirmation
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Strip trailing newlines from stdin input
    #[arg(short = 'n', long)]
    pub no_newline: bool,

    /// Treat content as binary (content is always passed through byte for byte)
    #[arg(short = 'b', long)]
    pub binary: bool,

    /// Copy only the first N lines
    #[arg(short = 'l', long = "lines", value_name = "N", default_value_t = 0)]
    pub lines: usize,

    /// Copy only the last N lines
    #[arg(short = 't', long = "tail", value_name = "N", default_value_t = 0)]
    pub tail: usize,

    /// Maximum file size in bytes (default: 100MB, or limits.max_file_size from config)
    #[arg(short = 'm', long = "max-size", value_name = "N")]
    pub max_size: Option<u64>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CompletionShell>,

    /// Show version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Target file
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokens after the target file; only the first file is used
    #[arg(hide = true, num_args = 1..)]
    pub extra: Vec<OsString>,
}

impl Cli {
    /// Resolve the parsed flags into driver options.
    pub fn options(&self) -> Options {
        let mode = if self.delete {
            Mode::Delete
        } else if self.paste {
            Mode::Paste
        } else {
            Mode::Copy
        };

        Options {
            mode,
            append: self.append,
            use_stdin: self.stdin,
            use_stdout: self.stdout,
            force: self.force,
            strip_trailing_newline: self.no_newline,
            binary: self.binary,
            line_limit: self.lines,
            tail_limit: self.tail,
            max_size: self.max_size,
            target: self.file.clone(),
        }
    }
}
