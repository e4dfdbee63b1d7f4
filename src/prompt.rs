//! Yes/no confirmation prompts.
//!
//! The gate itself is a plain function over the [`Prompter`] port so the
//! interactive terminal can be swapped for scripted answers in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of one line of interactive input per prompt.
pub trait Prompter {
    /// Show `message` and read one line of input.
    ///
    /// Returns `Ok(None)` at end of input.
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;
}

/// Prompts on stdout and reads answers from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", message)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Replays canned answers and records every prompt it was shown.
///
/// Once the answers run out it behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// A prompter with no answers, as if stdin were already at EOF.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.prompts.push(message.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Render the prompt line with the default answer in upper case.
pub fn render(prompt: &str, default_no: bool) -> String {
    let choices = if default_no { "y/N" } else { "Y/n" };
    format!("{} [{}]: ", prompt, choices)
}

/// Ask a yes/no question.
///
/// An empty answer picks the default. End of input or a read error is
/// always a "no", whatever the default. Otherwise only answers starting
/// with `y` or `Y` count as yes.
pub fn confirm(prompter: &mut dyn Prompter, prompt: &str, default_no: bool) -> bool {
    let line = match prompter.ask(&render(prompt, default_no)) {
        Ok(Some(line)) => line,
        Ok(None) => {
            tracing::debug!("confirmation hit end of input, declining");
            return false;
        }
        Err(e) => {
            tracing::warn!("failed to read confirmation: {}", e);
            return false;
        }
    };

    let answer = line.trim_end_matches(['\n', '\r']);
    match answer.chars().next() {
        None => !default_no,
        Some(c) => c.eq_ignore_ascii_case(&'y'),
    }
}
