//! Project API operations

use log::debug;

use crate::admin::client::org_path;
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Project, ProjectNameRequest};

impl AdminClient {
    /// Get all projects in the organization (with pagination)
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let path = org_path(&[api::PROJECTS]);
        self.fetch_all_pages::<Project>(&path, "projects").await
    }

    /// Create a new project
    pub async fn create_project(&self, name: &str) -> Result<Project> {
        let path = org_path(&[api::PROJECTS]);
        let project: Project = self
            .post_resource(
                &path,
                &ProjectNameRequest { name },
                &format!("project '{}'", name),
            )
            .await?;
        debug!("Created project {} ({})", project.id, project.name);
        Ok(project)
    }

    /// Get a single project by ID
    pub async fn retrieve_project(&self, project_id: &str) -> Result<Project> {
        let path = org_path(&[api::PROJECTS, project_id]);
        self.get_resource(&path, &format!("project '{}'", project_id))
            .await
    }

    /// Rename a project
    pub async fn modify_project(&self, project_id: &str, name: &str) -> Result<Project> {
        let path = org_path(&[api::PROJECTS, project_id]);
        self.post_resource(
            &path,
            &ProjectNameRequest { name },
            &format!("project '{}'", project_id),
        )
        .await
    }

    /// Archive a project (cannot be undone)
    pub async fn archive_project(&self, project_id: &str) -> Result<Project> {
        let path = org_path(&[api::PROJECTS, project_id, "archive"]);
        let project: Project = self
            .post_action(&path, &format!("project '{}'", project_id))
            .await?;
        debug!("Archived project {}", project.id);
        Ok(project)
    }
}
