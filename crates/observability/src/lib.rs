//! Tracing/logging setup shared by binaries and test harnesses.

/// Initialize process-wide tracing/logging.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// [`init`] with an explicit filter directive, for callers (mostly
/// tests) that want verbosity without touching the environment.
pub fn init_with_filter(filter: &str) {
    tracing::init_with_filter(filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
