//! Shared helpers for daemon integration tests.

#![allow(dead_code)]

pub mod db;
pub mod factory;

#[ctor::ctor]
fn init_test_logging() {
    daemon_test_support::test_logging::init();
}
