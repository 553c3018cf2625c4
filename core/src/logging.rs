//! logging.rs
//! Opt-in `tracing` subscriber for binaries and tests.
//!
//! The library only emits events; nothing is printed unless a subscriber
//! is installed, here or by the host application.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (e.g. `"info"` or `"zstream_core=debug"`).
///
/// Returns `false` when a global subscriber was already set.
pub fn init_logging(default_directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .try_init()
        .is_ok()
}
