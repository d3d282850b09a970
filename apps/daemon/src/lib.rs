#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod clients;
pub mod config;
pub mod daos;
pub mod entities;
pub mod error;
pub mod infra;
pub mod logging;
pub mod repos;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use clients::{get_postgres_client, install_postgres_client, PostgresClient};
pub use config::db::{db_url, DbProfile};
pub use daos::{find, get_group_dao, GroupDao};
pub use error::AppError;
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use logging::{get_logger, Logger};
pub use repos::groups::Group;
pub use state::daemon_state::DaemonState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    daemon_test_support::test_logging::init();
}
