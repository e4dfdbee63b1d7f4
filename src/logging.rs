//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so they never mix with content written to
//! stdout. The level is taken from `COPYCAT_LOG` (same syntax as
//! `RUST_LOG`) and defaults to warnings only.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "COPYCAT_LOG";

/// Filter used when `COPYCAT_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .without_time();

    // A second init (tests) is not an error worth reporting.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
