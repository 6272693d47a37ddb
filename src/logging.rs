//! Diagnostic logging setup.
//!
//! Events go to stderr; stdout is reserved for report output.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map the `-v` count to a level, falling back to the configured one.
pub fn level_for(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_lowercase(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `level`. An unknown level falls back to
/// `warn`. Calling this more than once is harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
