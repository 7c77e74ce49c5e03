//! Tracing/logging initialization.
//!
//! Filtering is controlled by `RUST_LOG`; without it [`DEFAULT_FILTER`] applies.

use tracing_subscriber::EnvFilter;

/// `info` everywhere, plus the per-request spans `tower_http::trace` emits at
/// `debug` for the pricing API.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// JSON logs + timestamps with [`DEFAULT_FILTER`] as fallback.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], with a caller-chosen fallback filter.
pub fn init_with_default(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let directives = filter.to_string();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        ::tracing::debug!(%directives, "tracing initialized");
    }
}
