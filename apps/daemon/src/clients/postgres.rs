use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::connect_db;

static POSTGRES_CLIENT: OnceCell<Arc<PostgresClient>> = OnceCell::const_new();

/// Shared handle over the daemon's relational store.
///
/// Named after the production backend; any SeaORM connection works, which is
/// how tests swap in SQLite.
#[derive(Debug, Clone)]
pub struct PostgresClient {
    conn: DatabaseConnection,
}

impl PostgresClient {
    pub async fn connect(profile: DbProfile) -> Result<Self, AppError> {
        let conn = connect_db(profile).await?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Query handle for SeaORM statements.
    pub fn client(&self) -> &DatabaseConnection {
        &self.conn
    }
}

/// Returns the process-wide client, connecting on first use with the
/// profile named by `DAEMON_DB_PROFILE`.
///
/// Concurrent first calls wait on a single connection attempt.
pub async fn get_postgres_client() -> Result<Arc<PostgresClient>, AppError> {
    let client = POSTGRES_CLIENT
        .get_or_try_init(|| async {
            let profile = DbProfile::from_env()?;
            info!(profile = ?profile, "postgres_client=init");
            PostgresClient::connect(profile).await.map(Arc::new)
        })
        .await?;
    Ok(client.clone())
}

/// Seeds the process-wide client with an existing connection.
pub fn install_postgres_client(client: PostgresClient) -> Result<(), AppError> {
    POSTGRES_CLIENT
        .set(Arc::new(client))
        .map_err(|_| AppError::config("postgres client is already initialized"))
}
