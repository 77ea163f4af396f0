//! Test helpers.

use tracing_subscriber::EnvFilter;

/// Route tracing output of the mock to the test harness.
///
/// Honors `RUST_LOG`; defaults to debug output of this crate. Safe to call from
/// every test, only the first call installs the subscriber.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("respmock_testing=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
