//! User-facing status output and confirmation prompts.

use std::io::{self, Write};

use crate::prompt::{self, Prompter};
use crate::theme::Theme;

/// Where status messages go and where confirmations come from.
///
/// Content written with `--stdout` shares the same writer, so status
/// lines and payload keep their relative order.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    prompter: &'a mut dyn Prompter,
    theme: Theme,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, prompter: &'a mut dyn Prompter, theme: Theme) -> Self {
        Self {
            out,
            prompter,
            theme,
        }
    }

    /// Print a neutral line.
    pub fn note(&mut self, message: &str) {
        self.line(message.to_string());
    }

    /// Print a warning line.
    pub fn warn(&mut self, message: &str) {
        let text = self.theme.warning_text(message);
        self.line(text);
    }

    /// Print a success line with a check mark.
    pub fn success(&mut self, message: &str) {
        let text = format!("{} {}", self.theme.success_text("✓"), message);
        self.line(text);
    }

    /// Ask a yes/no question through the prompter.
    pub fn confirm(&mut self, prompt: &str, default_no: bool) -> bool {
        // Anything queued must be visible before the prompt blocks.
        let _ = self.out.flush();
        prompt::confirm(self.prompter, prompt, default_no)
    }

    /// Raw writer for payload output.
    pub fn writer(&mut self) -> &mut dyn Write {
        self.out
    }

    fn line(&mut self, text: String) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                tracing::warn!("failed to write status message: {}", e);
            }
        }
    }
}
