use std::sync::Arc;

use crate::clients::PostgresClient;
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::logging::{get_logger, Logger};
use crate::state::daemon_state::DaemonState;

/// Builder for creating DaemonState instances (used in both tests and startup code)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    client: Option<PostgresClient>,
    log: Option<&'static Logger>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            client: None,
            log: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    /// Use an already connected client; takes precedence over `with_db`.
    pub fn with_client(mut self, client: PostgresClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_logger(mut self, log: &'static Logger) -> Self {
        self.log = Some(log);
        self
    }

    pub async fn build(self) -> Result<DaemonState, AppError> {
        let log = self.log.unwrap_or_else(get_logger);
        let client = match (self.client, self.db_profile) {
            (Some(client), _) => client,
            (None, Some(profile)) => PostgresClient::connect(profile).await?,
            (None, None) => {
                return Err(AppError::config(
                    "state builder needs a database profile or a client",
                ))
            }
        };
        Ok(DaemonState::new(Arc::new(client), log))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
