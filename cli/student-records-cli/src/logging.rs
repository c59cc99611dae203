//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use std::io;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the filter from `RUST_LOG`, falling back to `default_filter`.
///
/// An unparsable fallback degrades to `warn` rather than failing startup.
#[must_use]
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global fmt subscriber. Failure is logged and otherwise
/// ignored, so a second call is harmless.
pub fn init_tracing(default_filter: &str) {
    if let Err(e) = fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
