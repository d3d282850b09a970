use std::future::Future;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{build_connection_settings, db_url, DbProfile};
use crate::error::AppError;

/// How often and how patiently the first Postgres connection is attempted.
#[derive(Debug, Clone, Copy)]
struct ConnectRetry {
    attempts: u32,
    pause: Duration,
}

impl Default for ConnectRetry {
    fn default() -> Self {
        Self {
            attempts: 5,
            pause: Duration::from_millis(500),
        }
    }
}

impl ConnectRetry {
    async fn run<T, F, Fut>(self, mut attempt_fn: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let mut attempt = 1;
        loop {
            let err = match attempt_fn().await {
                Ok(value) => {
                    if attempt > 1 {
                        info!(attempt, "db_connect=recovered");
                    }
                    return Ok(value);
                }
                Err(err) => err,
            };

            warn!(
                attempt,
                attempts = self.attempts,
                code = err.code(),
                error = %err,
                "db_connect=attempt_failed"
            );
            if attempt >= self.attempts {
                return Err(err);
            }
            attempt += 1;
            tokio::time::sleep(self.pause).await;
        }
    }
}

fn engine_name(profile: &DbProfile) -> &'static str {
    if profile.is_sqlite() {
        "sqlite"
    } else {
        "postgresql"
    }
}

/// Opens a database connection for the profile.
///
/// Postgres gets a few attempts so the daemon tolerates a database that is
/// still starting. SQLite connects once. No schema work happens here.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(&profile)?;
    let settings = build_connection_settings(&profile)?;
    let engine = engine_name(&profile);

    let mut opt = ConnectOptions::new(&url);
    opt.min_connections(1)
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .sqlx_logging(settings.sqlx_logging);
    if let Some(idle) = settings.idle_timeout {
        opt.idle_timeout(idle);
    }
    if let Some(lifetime) = settings.max_lifetime {
        opt.max_lifetime(lifetime);
    }

    info!(engine, max_connections = settings.max_connections, "db_connect=start");

    let conn = if profile.is_sqlite() {
        Database::connect(opt)
            .await
            .map_err(|e| AppError::config(format!("failed to open {engine} database: {e}")))?
    } else {
        ConnectRetry::default()
            .run(|| {
                let opt = opt.clone();
                async move {
                    Database::connect(opt)
                        .await
                        .map_err(AppError::from)
                }
            })
            .await?
    };

    info!(engine, "db_connect=ready");
    Ok(conn)
}
