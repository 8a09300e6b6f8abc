//! Project membership lifecycle

use async_trait::async_trait;

use super::{absent_on_not_found, ok_if_gone, vanished_during_update, ManagedResource, ProjectScopedId};
use crate::admin::{AdminClient, ProjectUser, ProjectUserRole};
use crate::error::{AdminError, Result};

/// Desired membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUserConfig {
    pub project_id: String,
    pub user_id: String,
    pub role: ProjectUserRole,
}

/// Observed membership, together with the project it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectUserState {
    pub project_id: String,
    pub user: ProjectUser,
}

impl ProjectUserState {
    pub fn id(&self) -> ProjectScopedId {
        ProjectScopedId::new(&self.project_id, &self.user.id)
    }
}

pub struct ProjectUserResource {
    client: AdminClient,
}

impl ProjectUserResource {
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ManagedResource for ProjectUserResource {
    type Config = ProjectUserConfig;
    type State = ProjectUserState;
    type Id = ProjectScopedId;

    fn kind(&self) -> &'static str {
        "project user"
    }

    fn parse_id(&self, raw: &str) -> Result<ProjectScopedId> {
        raw.parse()
    }

    async fn create(&self, config: &ProjectUserConfig) -> Result<ProjectUserState> {
        let user = self
            .client
            .add_project_user(&config.project_id, &config.user_id, config.role)
            .await?;
        Ok(ProjectUserState {
            project_id: config.project_id.clone(),
            user,
        })
    }

    async fn read(&self, id: &ProjectScopedId) -> Result<Option<ProjectUserState>> {
        let user = absent_on_not_found(
            self.client
                .retrieve_project_user(&id.project_id, &id.resource_id)
                .await,
            &format!("project user '{}'", id),
        )?;
        Ok(user.map(|user| ProjectUserState {
            project_id: id.project_id.clone(),
            user,
        }))
    }

    async fn update(
        &self,
        id: &ProjectScopedId,
        config: &ProjectUserConfig,
    ) -> Result<ProjectUserState> {
        if id.project_id != config.project_id || id.resource_id != config.user_id {
            return Err(AdminError::Config(format!(
                "Project user '{}' cannot be moved to '{}/{}'; remove it and add a new one",
                id, config.project_id, config.user_id
            )));
        }

        let user = vanished_during_update(
            self.client
                .modify_project_user(&id.project_id, &id.resource_id, config.role)
                .await,
            &format!("user '{}' in project '{}'", id.resource_id, id.project_id),
        )?;
        Ok(ProjectUserState {
            project_id: id.project_id.clone(),
            user,
        })
    }

    async fn delete(&self, id: &ProjectScopedId) -> Result<()> {
        ok_if_gone(
            self.client
                .remove_project_user(&id.project_id, &id.resource_id)
                .await,
            &format!("project user '{}'", id),
        )
    }
}
