//! Service account API operations

use log::debug;

use crate::admin::client::org_path;
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreatedServiceAccount, ProjectServiceAccount, ServiceAccountCreateRequest};

fn account_label(project_id: &str, account_id: &str) -> String {
    format!("service account '{}' in project '{}'", account_id, project_id)
}

impl AdminClient {
    /// Get all service accounts of a project (with pagination)
    pub async fn list_service_accounts(&self, project_id: &str) -> Result<Vec<ProjectServiceAccount>> {
        let path = org_path(&[api::PROJECTS, project_id, api::SERVICE_ACCOUNTS]);
        let accounts = self
            .fetch_all_pages::<ProjectServiceAccount>(
                &path,
                &format!("service accounts of project '{}'", project_id),
            )
            .await?;
        Ok(accounts
            .into_iter()
            .map(|account| account.with_project(project_id))
            .collect())
    }

    /// Create a service account; the returned API key is shown only once
    pub async fn create_service_account(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<CreatedServiceAccount> {
        let path = org_path(&[api::PROJECTS, project_id, api::SERVICE_ACCOUNTS]);
        let mut created: CreatedServiceAccount = self
            .post_resource(
                &path,
                &ServiceAccountCreateRequest { name },
                &format!("service account '{}' in project '{}'", name, project_id),
            )
            .await?;
        created.account = created.account.with_project(project_id);
        debug!(
            "Created service account {} in project {} (key {})",
            created.account.id, project_id, created.api_key.id
        );
        Ok(created)
    }

    /// Get a single service account
    pub async fn retrieve_service_account(
        &self,
        project_id: &str,
        account_id: &str,
    ) -> Result<ProjectServiceAccount> {
        let path = org_path(&[api::PROJECTS, project_id, api::SERVICE_ACCOUNTS, account_id]);
        let account: ProjectServiceAccount = self
            .get_resource(&path, &account_label(project_id, account_id))
            .await?;
        Ok(account.with_project(project_id))
    }

    /// Delete a service account and its keys
    pub async fn delete_service_account(&self, project_id: &str, account_id: &str) -> Result<()> {
        let path = org_path(&[api::PROJECTS, project_id, api::SERVICE_ACCOUNTS, account_id]);
        self.delete_resource(&path, &account_label(project_id, account_id))
            .await
    }
}
