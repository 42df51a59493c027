//! Tracing/logging initialization.

use ::tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process, filtered via `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    init_with(filter);
}

/// Initialize with an explicit filter directive (e.g. `"debug"` or
/// `"ripple_exec=trace"`), ignoring the environment.
pub fn init_with_filter(filter: &str) {
    init_with(EnvFilter::new(filter));
}

fn init_with(filter: EnvFilter) {
    // JSON logs + timestamps; worker threads show up via their names.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_thread_names(true)
        .try_init()
        .is_ok();
    if installed {
        debug!("tracing initialized");
    }
}
