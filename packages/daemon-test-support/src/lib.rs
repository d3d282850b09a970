//! Daemon test support utilities
//!
//! Shared logging bootstrap for the daemon's unit and integration tests.

pub mod test_logging;
