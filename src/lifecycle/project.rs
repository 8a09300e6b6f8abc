//! Project lifecycle
//!
//! Projects cannot be deleted, only archived, so `delete` archives.

use async_trait::async_trait;
use log::{debug, info};

use super::{
    absent_on_not_found, ok_if_gone, parse_plain_id, vanished_during_update, ManagedResource,
};
use crate::admin::{AdminClient, Project};
use crate::error::Result;

/// Desired project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
}

pub struct ProjectResource {
    client: AdminClient,
}

impl ProjectResource {
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ManagedResource for ProjectResource {
    type Config = ProjectConfig;
    type State = Project;
    type Id = String;

    fn kind(&self) -> &'static str {
        "project"
    }

    fn parse_id(&self, raw: &str) -> Result<String> {
        parse_plain_id(raw, self.kind())
    }

    async fn create(&self, config: &ProjectConfig) -> Result<Project> {
        self.client.create_project(&config.name).await
    }

    async fn read(&self, id: &String) -> Result<Option<Project>> {
        absent_on_not_found(
            self.client.retrieve_project(id).await,
            &format!("project '{}'", id),
        )
    }

    async fn update(&self, id: &String, config: &ProjectConfig) -> Result<Project> {
        vanished_during_update(
            self.client.modify_project(id, &config.name).await,
            &format!("project '{}'", id),
        )
    }

    /// Archive the project; already archived or missing projects are left alone
    async fn delete(&self, id: &String) -> Result<()> {
        let label = format!("project '{}'", id);
        match self.read(id).await? {
            None => return Ok(()),
            Some(project) if project.is_archived() => {
                debug!("{} is already archived", label);
                return Ok(());
            }
            Some(_) => {}
        }

        let result = self.client.archive_project(id).await.map(|project| {
            info!("Archived {}", label);
            debug!("{} status is now {}", label, project.status);
        });
        ok_if_gone(result, &label)
    }
}
