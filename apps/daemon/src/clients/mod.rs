//! Database client collaborator and its process-wide provider.

pub mod postgres;

pub use postgres::{get_postgres_client, install_postgres_client, PostgresClient};
