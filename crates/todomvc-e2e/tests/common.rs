// Shared test support

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

/// Initializes tracing output for tests.
///
/// Safe to call from every test; only the first call installs a
/// subscriber. Verbosity follows RUST_LOG, e.g.:
///   RUST_LOG=todomvc_e2e=debug cargo test -- --include-ignored
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
