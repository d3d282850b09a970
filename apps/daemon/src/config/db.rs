use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Database profile for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production Postgres database
    Prod,
    /// Test Postgres database - enforces safety rules
    Test,
    /// Ephemeral SQLite database living in a single connection
    InMemory,
    /// SQLite database file (defaults to `daemon.sqlite` in the working directory)
    SqliteFile { file: Option<String> },
}

impl DbProfile {
    /// Reads `DAEMON_DB_PROFILE` (`prod`, `test`, `memory`, `sqlite:<path>`).
    /// Defaults to [`DbProfile::Prod`] when unset.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DAEMON_DB_PROFILE") {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Ok(DbProfile::Prod),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        match raw {
            "prod" => Ok(DbProfile::Prod),
            "test" => Ok(DbProfile::Test),
            "memory" => Ok(DbProfile::InMemory),
            "sqlite" => Ok(DbProfile::SqliteFile { file: None }),
            _ => match raw.strip_prefix("sqlite:") {
                Some(path) if !path.is_empty() => Ok(DbProfile::SqliteFile {
                    file: Some(path.to_string()),
                }),
                _ => Err(AppError::config(format!(
                    "Unsupported DAEMON_DB_PROFILE '{raw}' (expected prod, test, memory or sqlite:<path>)"
                ))),
            },
        }
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbProfile::InMemory | DbProfile::SqliteFile { .. })
    }
}

/// Pool settings applied when the client connects
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// `None` leaves the pool default in place.
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    pub sqlx_logging: bool,
}

/// Recycling the lone `sqlite::memory:` connection would drop the database,
/// so it is kept for longer than any daemon run.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: None,
            max_lifetime: None,
            sqlx_logging: false,
        }
    }
}

/// Builds pool settings for the profile, honouring
/// `DAEMON_DB_MAX_CONNECTIONS` and `DAEMON_DB_ACQUIRE_TIMEOUT_SECS`.
pub fn build_connection_settings(profile: &DbProfile) -> Result<ConnectionSettings, AppError> {
    let defaults = ConnectionSettings::default();

    let max_connections = match profile {
        // every sqlite::memory: connection is a separate database
        DbProfile::InMemory => 1,
        _ => parse_var("DAEMON_DB_MAX_CONNECTIONS")?.unwrap_or(defaults.max_connections),
    };
    if max_connections == 0 {
        return Err(AppError::config(
            "DAEMON_DB_MAX_CONNECTIONS must be greater than zero",
        ));
    }

    let acquire_timeout = parse_var("DAEMON_DB_ACQUIRE_TIMEOUT_SECS")?
        .map(Duration::from_secs)
        .unwrap_or(defaults.acquire_timeout);

    let (idle_timeout, max_lifetime) = match profile {
        DbProfile::InMemory => (
            Some(MEMORY_CONNECTION_LIFETIME),
            Some(MEMORY_CONNECTION_LIFETIME),
        ),
        _ => (defaults.idle_timeout, defaults.max_lifetime),
    };

    Ok(ConnectionSettings {
        max_connections,
        acquire_timeout,
        idle_timeout,
        max_lifetime,
        sqlx_logging: defaults.sqlx_logging,
    })
}

/// Builds a database URL from environment variables based on profile
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
        DbProfile::SqliteFile { file } => {
            let path = file.as_deref().unwrap_or("daemon.sqlite");
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::Prod | DbProfile::Test => {
            let host = host();
            let port = port();
            let db_name = db_name(profile)?;
            let (username, password) = credentials()?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
        _ => must_var("DAEMON_DB"),
    }
}

fn credentials() -> Result<(String, String), AppError> {
    let username = must_var("DAEMON_DB_USER")?;
    let password = must_var("DAEMON_DB_PASSWORD")?;
    Ok((username, password))
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("Environment variable '{name}' is not a valid number: '{raw}'"))),
        Err(_) => Ok(None),
    }
}
