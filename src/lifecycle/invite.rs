//! Invite lifecycle

use async_trait::async_trait;
use log::info;

use super::{absent_on_not_found, ok_if_gone, parse_plain_id, ManagedResource};
use crate::admin::{AdminClient, Invite, InviteRole};
use crate::error::Result;

/// Desired invite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteConfig {
    pub email: String,
    pub role: InviteRole,
}

/// Invites are immutable on the server: any change replaces the invite
pub struct InviteResource {
    client: AdminClient,
}

impl InviteResource {
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ManagedResource for InviteResource {
    type Config = InviteConfig;
    type State = Invite;
    type Id = String;

    fn kind(&self) -> &'static str {
        "invite"
    }

    fn parse_id(&self, raw: &str) -> Result<String> {
        parse_plain_id(raw, self.kind())
    }

    async fn create(&self, config: &InviteConfig) -> Result<Invite> {
        self.client.create_invite(&config.email, config.role).await
    }

    async fn read(&self, id: &String) -> Result<Option<Invite>> {
        absent_on_not_found(
            self.client.retrieve_invite(id).await,
            &format!("invite '{}'", id),
        )
    }

    async fn update(&self, id: &String, config: &InviteConfig) -> Result<Invite> {
        if let Some(current) = self.read(id).await? {
            if current.email == config.email && current.role == config.role {
                return Ok(current);
            }
        }

        info!(
            "Replacing invite {} with a new invite for {} ({})",
            id, config.email, config.role
        );
        self.delete(id).await?;
        self.create(config).await
    }

    async fn delete(&self, id: &String) -> Result<()> {
        ok_if_gone(
            self.client.delete_invite(id).await,
            &format!("invite '{}'", id),
        )
    }
}
