//! Group accessor.
//!
//! A [`GroupDao`] needs two collaborators: a [`PostgresClient`] to query with
//! and a [`Logger`] to run queries under. Both can be injected with
//! [`GroupDao::with_collaborators`], or resolved from the process-wide
//! providers by [`GroupDao::initialize`].

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn, Instrument};

use crate::clients::{get_postgres_client, PostgresClient};
use crate::error::AppError;
use crate::logging::{get_logger, Logger};
use crate::repos::groups::{self, Group};

static GROUP_DAO: OnceCell<GroupDao> = OnceCell::const_new();

#[derive(Debug, Default)]
pub struct GroupDao {
    client: Option<Arc<PostgresClient>>,
    log: Option<&'static Logger>,
}

impl GroupDao {
    /// Unbound accessor; call [`GroupDao::initialize`] before querying.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collaborators(client: Arc<PostgresClient>, log: &'static Logger) -> Self {
        Self {
            client: Some(client),
            log: Some(log),
        }
    }

    pub fn set_logger(&mut self) {
        self.log = Some(get_logger());
    }

    pub async fn set_client(&mut self) -> Result<(), AppError> {
        self.client = Some(get_postgres_client().await?);
        Ok(())
    }

    /// Binds whichever collaborators are still missing. Already bound
    /// handles are left as they are.
    pub async fn initialize(&mut self) -> Result<(), AppError> {
        if self.log.is_none() {
            self.set_logger();
        }
        if self.client.is_none() {
            self.set_client().await?;
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.client.is_some() && self.log.is_some()
    }

    pub fn client(&self) -> Option<&Arc<PostgresClient>> {
        self.client.as_ref()
    }

    pub fn logger(&self) -> Option<&'static Logger> {
        self.log
    }

    /// Looks up a group by id. A missing row is `Ok(None)`; database faults
    /// come back as [`AppError::Db`] untranslated.
    pub async fn find_by_id(&self, group_id: u64) -> Result<Option<Group>, AppError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| AppError::unbound("postgres client"))?;
        let log = self.log.ok_or_else(|| AppError::unbound("logger"))?;

        async {
            match groups::find_group_by_id(client.client(), group_id).await {
                Ok(group) => {
                    debug!(group_id, found = group.is_some(), "group_dao=find_by_id");
                    Ok(group)
                }
                Err(err) => {
                    warn!(group_id, code = err.code(), error = %err, "group_dao=find_by_id_failed");
                    Err(err)
                }
            }
        }
        .instrument(log.span().clone())
        .await
    }
}

/// Shared accessor, constructed and initialized on first use.
pub async fn get_group_dao() -> Result<&'static GroupDao, AppError> {
    GROUP_DAO
        .get_or_try_init(|| async {
            let mut dao = GroupDao::new();
            dao.initialize().await?;
            Ok::<_, AppError>(dao)
        })
        .await
}

pub async fn find(group_id: u64) -> Result<Option<Group>, AppError> {
    get_group_dao().await?.find_by_id(group_id).await
}
