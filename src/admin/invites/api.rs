//! Invite API operations

use log::debug;

use crate::admin::client::org_path;
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Invite, InviteCreateRequest, InviteRole};

impl AdminClient {
    /// Get all invites in the organization (with pagination)
    pub async fn list_invites(&self) -> Result<Vec<Invite>> {
        let path = org_path(&[api::INVITES]);
        self.fetch_all_pages::<Invite>(&path, "invites").await
    }

    /// Invite a user to the organization
    ///
    /// A duplicate email surfaces as `AdminError::Api` (4xx), not NotFound.
    pub async fn create_invite(&self, email: &str, role: InviteRole) -> Result<Invite> {
        let path = org_path(&[api::INVITES]);
        let body = InviteCreateRequest { email, role };

        let invite: Invite = self
            .post_resource(&path, &body, &format!("invite for '{}'", email))
            .await?;
        debug!("Created invite {} for {}", invite.id, email);
        Ok(invite)
    }

    /// Get a single invite by ID
    pub async fn retrieve_invite(&self, invite_id: &str) -> Result<Invite> {
        let path = org_path(&[api::INVITES, invite_id]);
        self.get_resource(&path, &format!("invite '{}'", invite_id))
            .await
    }

    /// Delete (revoke) an invite
    pub async fn delete_invite(&self, invite_id: &str) -> Result<()> {
        let path = org_path(&[api::INVITES, invite_id]);
        self.delete_resource(&path, &format!("invite '{}'", invite_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::InviteStatus;
    use crate::error::AdminError;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn invite_json(id: &str, email: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "object": "organization.invite",
            "id": id,
            "email": email,
            "role": "reader",
            "status": status,
            "invited_at": 1711471533,
            "expires_at": 1712076333,
            "accepted_at": null
        })
    }

    #[tokio::test]
    async fn test_list_invites() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organization/invites"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "object": "list",
                "data": [
                    invite_json("invite-1", "a@example.com", "pending"),
                    invite_json("invite-2", "b@example.com", "expired")
                ],
                "first_id": "invite-1",
                "last_id": "invite-2",
                "has_more": false
            })))
            .mount(&mock_server)
            .await;

        let invites = client.list_invites().await.unwrap();
        assert_eq!(invites.len(), 2);
        assert_eq!(invites[0].email, "a@example.com");
        assert_eq!(invites[1].status, InviteStatus::Expired);
    }

    #[tokio::test]
    async fn test_create_invite() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organization/invites"))
            .and(body_json(serde_json::json!({"email": "new@example.com", "role": "owner"})))
            .respond_with(ResponseTemplate::new(200).set_body_json({
                let mut body = invite_json("invite-new", "new@example.com", "pending");
                body["role"] = serde_json::json!("owner");
                body
            }))
            .expect(1)
            .mount(&mock_server)
            .await;

        let invite = client
            .create_invite("new@example.com", InviteRole::Owner)
            .await
            .unwrap();
        assert_eq!(invite.id, "invite-new");
        assert_eq!(invite.role, InviteRole::Owner);
        assert_eq!(invite.status, InviteStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_invite_duplicate_is_validation_error() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organization/invites"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "error": {
                    "message": "An invite for this email already exists",
                    "type": "invalid_request_error"
                }
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .create_invite("dup@example.com", InviteRole::Reader)
            .await
            .unwrap_err();
        assert!(!err.is_not_found());
        match err {
            AdminError::Api { status, message } => {
                assert_eq!(status, 409);
                assert!(message.contains("already exists"));
            }
            other => panic!("Expected AdminError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retrieve_invite() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organization/invites/invite-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(invite_json("invite-1", "a@example.com", "pending")),
            )
            .mount(&mock_server)
            .await;

        let invite = client.retrieve_invite("invite-1").await.unwrap();
        assert_eq!(invite.id, "invite-1");
    }

    #[tokio::test]
    async fn test_retrieve_invite_not_found() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organization/invites/invite-gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client.retrieve_invite("invite-gone").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("invite-gone"));
    }

    #[tokio::test]
    async fn test_delete_invite() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/organization/invites/invite-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "object": "organization.invite.deleted",
                "id": "invite-1",
                "deleted": true
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client.delete_invite("invite-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_timestamp_is_decode_error() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        let mut body = invite_json("invite-1", "a@example.com", "pending");
        body["invited_at"] = serde_json::json!("2024-03-26");

        Mock::given(method("GET"))
            .and(path("/organization/invites/invite-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let err = client.retrieve_invite("invite-1").await.unwrap_err();
        assert!(matches!(err, AdminError::Decode(_)));
    }
}
