//! Process-wide tracing/logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// The filter comes from `RUST_LOG` when set and falls back to `info`.
/// Safe to call multiple times (subsequent calls are no-ops), so tests and
/// embedding applications can both call it unconditionally.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();
}
