//! Logging init: stderr subscriber with env-filter override.
//!
//! The boot layer writes no files, so logs go to stderr only. `RUST_LOG`
//! takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Initialize the stderr tracing subscriber.
///
/// Called once by the binary after bootstrap has run; library consumers that
/// install their own subscriber skip this entirely.
pub fn init_logging(level: &LogLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,sidecar_boot={}", level.as_str())));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
