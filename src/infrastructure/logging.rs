//! Tracing subscriber setup

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
/// - Respects `RUST_LOG` if set
/// - Otherwise `warn`, or `debug` when `verbose`
/// - Writes to stderr so stdout carries only command output
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
