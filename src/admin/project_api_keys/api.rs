//! Project API key operations

use crate::admin::client::org_path;
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{ProjectApiKey, ProjectApiKeyRecord};

fn key_label(project_id: &str, key_id: &str) -> String {
    format!("API key '{}' in project '{}'", key_id, project_id)
}

impl AdminClient {
    /// Get all API keys of a project (with pagination)
    ///
    /// Fails with `OwnerMismatch` if any key carries an inconsistent owner.
    pub async fn list_project_api_keys(&self, project_id: &str) -> Result<Vec<ProjectApiKey>> {
        let path = org_path(&[api::PROJECTS, project_id, api::API_KEYS]);
        let records = self
            .fetch_all_pages::<ProjectApiKeyRecord>(
                &path,
                &format!("API keys of project '{}'", project_id),
            )
            .await?;
        records.into_iter().map(ProjectApiKey::try_from).collect()
    }

    /// Get a single API key
    pub async fn retrieve_project_api_key(
        &self,
        project_id: &str,
        key_id: &str,
    ) -> Result<ProjectApiKey> {
        let path = org_path(&[api::PROJECTS, project_id, api::API_KEYS, key_id]);
        let record: ProjectApiKeyRecord = self
            .get_resource(&path, &key_label(project_id, key_id))
            .await?;
        ProjectApiKey::try_from(record)
    }

    /// Revoke an API key
    pub async fn delete_project_api_key(&self, project_id: &str, key_id: &str) -> Result<()> {
        let path = org_path(&[api::PROJECTS, project_id, api::API_KEYS, key_id]);
        self.delete_resource(&path, &key_label(project_id, key_id))
            .await
    }
}
