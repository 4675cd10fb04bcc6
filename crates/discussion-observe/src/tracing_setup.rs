//! Tracing subscriber initialization.
//!
//! Diagnostics go to stderr so they never mix with the command's own output
//! on stdout.
//!
//! # Usage
//!
//! ```no_run
//! use discussion_observe::tracing_setup::{init_tracing, verbosity_filter};
//!
//! init_tracing(verbosity_filter(1, false)).unwrap();
//! ```

use tracing_subscriber::EnvFilter;

/// Map `-v` count and `--quiet` to a default filter directive.
///
/// `--quiet` only applies when no `-v` was given.
pub fn verbosity_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,discussion=debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG`, when set and valid, takes precedence over `default_filter`.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
}
