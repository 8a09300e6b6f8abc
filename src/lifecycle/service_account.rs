//! Service account lifecycle

use async_trait::async_trait;
use log::info;

use super::{absent_on_not_found, ok_if_gone, ManagedResource, ProjectScopedId};
use crate::admin::{AdminClient, ProjectServiceAccount, ServiceAccountApiKey};
use crate::error::Result;

/// Desired service account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccountConfig {
    pub project_id: String,
    pub name: String,
}

/// Observed service account
///
/// `api_key` is only populated by `create` (and `update`, which recreates);
/// the server never returns the key again.
#[derive(Debug)]
pub struct ServiceAccountState {
    pub account: ProjectServiceAccount,
    pub api_key: Option<ServiceAccountApiKey>,
}

impl ServiceAccountState {
    pub fn id(&self) -> ProjectScopedId {
        ProjectScopedId::new(&self.account.project_id, &self.account.id)
    }
}

pub struct ServiceAccountResource {
    client: AdminClient,
}

impl ServiceAccountResource {
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ManagedResource for ServiceAccountResource {
    type Config = ServiceAccountConfig;
    type State = ServiceAccountState;
    type Id = ProjectScopedId;

    fn kind(&self) -> &'static str {
        "service account"
    }

    fn parse_id(&self, raw: &str) -> Result<ProjectScopedId> {
        raw.parse()
    }

    async fn create(&self, config: &ServiceAccountConfig) -> Result<ServiceAccountState> {
        let created = self
            .client
            .create_service_account(&config.project_id, &config.name)
            .await?;
        Ok(ServiceAccountState {
            account: created.account,
            api_key: Some(created.api_key),
        })
    }

    async fn read(&self, id: &ProjectScopedId) -> Result<Option<ServiceAccountState>> {
        let account = absent_on_not_found(
            self.client
                .retrieve_service_account(&id.project_id, &id.resource_id)
                .await,
            &format!("service account '{}'", id),
        )?;
        Ok(account.map(|account| ServiceAccountState {
            account,
            api_key: None,
        }))
    }

    /// Service accounts cannot be modified: replace with a new account and key
    async fn update(
        &self,
        id: &ProjectScopedId,
        config: &ServiceAccountConfig,
    ) -> Result<ServiceAccountState> {
        info!(
            "Replacing service account {} with '{}' in project {}",
            id, config.name, config.project_id
        );
        self.delete(id).await?;
        self.create(config).await
    }

    async fn delete(&self, id: &ProjectScopedId) -> Result<()> {
        ok_if_gone(
            self.client
                .delete_service_account(&id.project_id, &id.resource_id)
                .await,
            &format!("service account '{}'", id),
        )
    }
}
