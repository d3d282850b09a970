//! Subscriber setup shared by every daemon test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_TEST_FILTER: &str = "warn";

static SUBSCRIBER: OnceCell<bool> = OnceCell::new();

/// Directive used for test output: `TEST_LOG` wins over `RUST_LOG`.
fn test_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|name| std::env::var(name).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TEST_FILTER))
}

/// Installs the test-writer subscriber once per process.
///
/// Safe to call from every test and from `ctor` hooks.
///
/// ```bash
/// TEST_LOG=daemon=debug cargo test -p daemon
/// ```
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .try_init()
            .is_ok()
    });
}
