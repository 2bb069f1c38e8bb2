//! Diagnostic logging setup
//!
//! Logs go to stderr so that stdout stays clean for command output.
//! The filter is taken from `RUST_LOG` when set, then the configured
//! `log_filter`, then the `-v` count.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for a `-v` count
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "albumr=warn",
        1 => "albumr=info",
        2 => "albumr=debug",
        _ => "albumr=trace",
    }
}

fn build_filter(verbosity: u8, configured: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    // -v on the command line beats the config file
    let directive = match configured {
        Some(directive) if verbosity == 0 => directive,
        _ => default_directive(verbosity),
    };
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid log filter '{directive}': {e}");
        EnvFilter::new(default_directive(verbosity))
    })
}

/// Install the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init(verbosity: u8, configured: Option<&str>) {
    let filter = build_filter(verbosity, configured);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
