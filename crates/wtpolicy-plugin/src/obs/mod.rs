//! Observability.
//!
//! stdout carries the protocol response, so logs always go to stderr.
//! Verbosity follows `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber. Call once, at process start.
pub fn init_logging() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
