//! ANSI color helpers for CLI status output.

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color codes for CLI output
pub mod ansi {
    /// Light green (ANSI 92) - used for success marks
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    /// Yellow (ANSI 33) - used for warnings
    pub const YELLOW: &str = "\x1b[33m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
}

/// Colors used for status messages.
///
/// A plain theme returns text untouched, which is what tests and
/// redirected output get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    /// Colored output.
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Pick a theme from the environment and whether stdout is a terminal.
    ///
    /// `NO_COLOR` always wins, then `FORCE_COLOR`.
    pub fn detect() -> Self {
        Self::from_env(
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var_os("FORCE_COLOR").is_some(),
            atty::is(atty::Stream::Stdout),
        )
    }

    fn from_env(no_color: bool, force_color: bool, is_tty: bool) -> Self {
        if no_color {
            Self::plain()
        } else if force_color || is_tty {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn is_colored(&self) -> bool {
        self.enabled
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(ansi::DARK_GRAY, text)
    }

    /// Format text with the warning color.
    pub fn warning_text(&self, text: &str) -> String {
        self.paint(ansi::YELLOW, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(ansi::RED, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(ansi::LIGHT_GREEN, text)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}
