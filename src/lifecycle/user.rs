//! Organization user lifecycle
//!
//! Users join through invites; the API cannot create them. `create` adopts
//! an existing user by id and applies the configured role/disabled flag.

use async_trait::async_trait;
use log::{debug, info};

use super::{
    absent_on_not_found, ok_if_gone, parse_plain_id, vanished_during_update, ManagedResource,
};
use crate::admin::{AdminClient, User, UserRole, UserUpdate};
use crate::error::{AdminError, Result};

/// Desired user settings; unset fields are left as they are on the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pub user_id: String,
    pub role: Option<UserRole>,
    pub disabled: Option<bool>,
}

impl UserConfig {
    /// The fields of this config that differ from `current`
    fn changes_from(&self, current: &User) -> UserUpdate {
        UserUpdate {
            role: self.role.filter(|role| *role != current.role),
            disabled: self.disabled.filter(|disabled| *disabled != current.disabled),
        }
    }
}

pub struct UserResource {
    client: AdminClient,
}

impl UserResource {
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }

    async fn apply(&self, config: &UserConfig, current: User) -> Result<User> {
        let update = config.changes_from(&current);
        if update.is_empty() {
            debug!("User {} already matches configuration", current.id);
            return Ok(current);
        }
        vanished_during_update(
            self.client.modify_user(&current.id, &update).await,
            &format!("user '{}'", current.id),
        )
    }
}

#[async_trait]
impl ManagedResource for UserResource {
    type Config = UserConfig;
    type State = User;
    type Id = String;

    fn kind(&self) -> &'static str {
        "user"
    }

    fn parse_id(&self, raw: &str) -> Result<String> {
        parse_plain_id(raw, self.kind())
    }

    async fn create(&self, config: &UserConfig) -> Result<User> {
        let current = self
            .client
            .retrieve_user(&config.user_id)
            .await
            .map_err(|e| match e {
                AdminError::NotFound { .. } => AdminError::NotFound {
                    resource: format!(
                        "user '{}' (users cannot be created; invite them first)",
                        config.user_id
                    ),
                },
                other => other,
            })?;
        info!("Adopting existing user {} ({})", current.id, current.email);
        self.apply(config, current).await
    }

    async fn read(&self, id: &String) -> Result<Option<User>> {
        absent_on_not_found(
            self.client.retrieve_user(id).await,
            &format!("user '{}'", id),
        )
    }

    async fn update(&self, id: &String, config: &UserConfig) -> Result<User> {
        let current = vanished_during_update(
            self.client.retrieve_user(id).await,
            &format!("user '{}'", id),
        )?;
        self.apply(config, current).await
    }

    /// Remove the user from the organization
    async fn delete(&self, id: &String) -> Result<()> {
        ok_if_gone(
            self.client.delete_user(id).await,
            &format!("user '{}'", id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_json(role: &str, disabled: bool) -> serde_json::Value {
        serde_json::json!({
            "id": "user_1",
            "email": "a@example.com",
            "role": role,
            "added_at": 1711471533,
            "disabled": disabled
        })
    }

    #[tokio::test]
    async fn test_create_adopts_and_applies_changes() {
        let mock_server = MockServer::start().await;
        let resource = UserResource::new(AdminClient::test_client(&mock_server.uri()));

        Mock::given(method("GET"))
            .and(path("/organization/users/user_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("reader", false)))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/organization/users/user_1"))
            .and(body_json(serde_json::json!({"role": "owner"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("owner", false)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = resource
            .create(&UserConfig {
                user_id: "user_1".to_string(),
                role: Some(UserRole::Owner),
                disabled: Some(false),
            })
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Owner);
    }

    #[tokio::test]
    async fn test_create_without_changes_sends_no_modify() {
        let mock_server = MockServer::start().await;
        let resource = UserResource::new(AdminClient::test_client(&mock_server.uri()));

        Mock::given(method("GET"))
            .and(path("/organization/users/user_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("owner", true)))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let user = resource
            .create(&UserConfig {
                user_id: "user_1".to_string(),
                role: Some(UserRole::Owner),
                disabled: None,
            })
            .await
            .unwrap();
        assert!(user.disabled);
    }

    #[tokio::test]
    async fn test_create_unknown_user() {
        let mock_server = MockServer::start().await;
        let resource = UserResource::new(AdminClient::test_client(&mock_server.uri()));

        Mock::given(method("GET"))
            .and(path("/organization/users/user_x"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = resource
            .create(&UserConfig {
                user_id: "user_x".to_string(),
                role: None,
                disabled: Some(true),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("invite them first"));
    }

    #[tokio::test]
    async fn test_update_vanished_user() {
        let mock_server = MockServer::start().await;
        let resource = UserResource::new(AdminClient::test_client(&mock_server.uri()));

        Mock::given(method("GET"))
            .and(path("/organization/users/user_1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = resource
            .update(
                &"user_1".to_string(),
                &UserConfig {
                    user_id: "user_1".to_string(),
                    role: None,
                    disabled: Some(true),
                },
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("deleted outside of oaiadmin"));
    }

    #[tokio::test]
    async fn test_delete_twice_is_ok() {
        let mock_server = MockServer::start().await;
        let resource = UserResource::new(AdminClient::test_client(&mock_server.uri()));

        Mock::given(method("DELETE"))
            .and(path("/organization/users/user_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "object": "organization.user.deleted",
                "id": "user_1",
                "deleted": true
            })))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/organization/users/user_1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let id = "user_1".to_string();
        resource.delete(&id).await.unwrap();
        resource.delete(&id).await.unwrap();
    }
}
