//! Invite data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::timestamp;
use crate::admin::traits::{parse_wire_enum, AdminResource};

/// Role granted to the invited user on acceptance
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InviteRole {
    #[serde(alias = "member")]
    Reader,
    #[serde(alias = "admin")]
    Owner,
}

impl std::fmt::Display for InviteRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InviteRole::Reader => write!(f, "reader"),
            InviteRole::Owner => write!(f, "owner"),
        }
    }
}

impl std::str::FromStr for InviteRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire_enum(s, "invite role")
    }
}

/// Invite status, driven by the server only
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Expired,
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InviteStatus::Pending => write!(f, "pending"),
            InviteStatus::Accepted => write!(f, "accepted"),
            InviteStatus::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for InviteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire_enum(s, "invite status")
    }
}

/// Organization invite
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Invite {
    pub id: String,
    pub email: String,
    pub role: InviteRole,
    pub status: InviteStatus,
    #[serde(with = "timestamp")]
    pub invited_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub expires_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub accepted_at: Option<DateTime<Utc>>,
}

impl AdminResource for Invite {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.email
    }
}

/// Request body for `POST /organization/invites`
#[derive(Serialize, Debug)]
pub(crate) struct InviteCreateRequest<'a> {
    pub email: &'a str,
    pub role: InviteRole,
}
