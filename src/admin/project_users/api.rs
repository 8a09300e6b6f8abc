//! Project user API operations

use log::debug;

use crate::admin::client::org_path;
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{ProjectUser, ProjectUserAddRequest, ProjectUserRole, ProjectUserRoleRequest};

fn membership_label(project_id: &str, user_id: &str) -> String {
    format!("user '{}' in project '{}'", user_id, project_id)
}

impl AdminClient {
    /// Get all users of a project (with pagination)
    pub async fn list_project_users(&self, project_id: &str) -> Result<Vec<ProjectUser>> {
        let path = org_path(&[api::PROJECTS, project_id, api::USERS]);
        self.fetch_all_pages::<ProjectUser>(&path, &format!("users of project '{}'", project_id))
            .await
    }

    /// Add an organization user to a project
    pub async fn add_project_user(
        &self,
        project_id: &str,
        user_id: &str,
        role: ProjectUserRole,
    ) -> Result<ProjectUser> {
        let path = org_path(&[api::PROJECTS, project_id, api::USERS]);
        let user: ProjectUser = self
            .post_resource(
                &path,
                &ProjectUserAddRequest { user_id, role },
                &membership_label(project_id, user_id),
            )
            .await?;
        debug!("Added user {} to project {} as {}", user.id, project_id, role);
        Ok(user)
    }

    /// Get a single project membership
    pub async fn retrieve_project_user(&self, project_id: &str, user_id: &str) -> Result<ProjectUser> {
        let path = org_path(&[api::PROJECTS, project_id, api::USERS, user_id]);
        self.get_resource(&path, &membership_label(project_id, user_id))
            .await
    }

    /// Change the role of a project member
    pub async fn modify_project_user(
        &self,
        project_id: &str,
        user_id: &str,
        role: ProjectUserRole,
    ) -> Result<ProjectUser> {
        let path = org_path(&[api::PROJECTS, project_id, api::USERS, user_id]);
        self.post_resource(
            &path,
            &ProjectUserRoleRequest { role },
            &membership_label(project_id, user_id),
        )
        .await
    }

    /// Remove a user from a project
    pub async fn remove_project_user(&self, project_id: &str, user_id: &str) -> Result<()> {
        let path = org_path(&[api::PROJECTS, project_id, api::USERS, user_id]);
        self.delete_resource(&path, &membership_label(project_id, user_id))
            .await
    }
}
