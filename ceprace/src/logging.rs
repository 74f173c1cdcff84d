//! Logging infrastructure for ceprace.
//!
//! Diagnostics flow through `tracing` to stderr, keeping stdout reserved
//! for the structured result record. Verbosity comes from the `RUST_LOG`
//! environment variable and defaults to `info`.

use std::io;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Installs the global subscriber; call once at process start.
pub fn init_logging() {
    // Create env filter (defaults to INFO if RUST_LOG not set)
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
