use std::sync::Arc;

use crate::clients::PostgresClient;
use crate::daos::GroupDao;
use crate::logging::Logger;

/// Collaborators built once at startup and handed to callers by reference.
#[derive(Debug, Clone)]
pub struct DaemonState {
    pub client: Arc<PostgresClient>,
    pub log: &'static Logger,
}

impl DaemonState {
    pub fn new(client: Arc<PostgresClient>, log: &'static Logger) -> Self {
        Self { client, log }
    }

    /// A [`GroupDao`] bound to this state's client and logger.
    pub fn group_dao(&self) -> GroupDao {
        GroupDao::with_collaborators(self.client.clone(), self.log)
    }
}
