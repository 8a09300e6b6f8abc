//! User API operations

use log::debug;

use crate::admin::client::org_path;
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::{AdminError, Result};

use super::models::{User, UserUpdate};

impl AdminClient {
    /// Get all users in the organization (with pagination)
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let path = org_path(&[api::USERS]);
        self.fetch_all_pages::<User>(&path, "users").await
    }

    /// Get a single user by ID
    pub async fn retrieve_user(&self, user_id: &str) -> Result<User> {
        let path = org_path(&[api::USERS, user_id]);
        self.get_resource(&path, &format!("user '{}'", user_id))
            .await
    }

    /// Change a user's role and/or disabled flag
    ///
    /// Only the fields set in `update` are sent.
    pub async fn modify_user(&self, user_id: &str, update: &UserUpdate) -> Result<User> {
        if update.is_empty() {
            return Err(AdminError::Config(format!(
                "Nothing to update for user '{}': set a role or the disabled flag",
                user_id
            )));
        }

        let path = org_path(&[api::USERS, user_id]);
        let user: User = self
            .post_resource(&path, update, &format!("user '{}'", user_id))
            .await?;
        debug!(
            "Modified user {} (role: {}, disabled: {})",
            user.id, user.role, user.disabled
        );
        Ok(user)
    }

    /// Remove a user from the organization
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let path = org_path(&[api::USERS, user_id]);
        self.delete_resource(&path, &format!("user '{}'", user_id))
            .await
    }
}
