//! User data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::timestamp;
use crate::admin::traits::{parse_wire_enum, AdminResource};

/// Organization-level role of a user
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[serde(alias = "member")]
    Reader,
    #[serde(alias = "admin")]
    Owner,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Reader => write!(f, "reader"),
            UserRole::Owner => write!(f, "owner"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire_enum(s, "user role")
    }
}

/// Member of the organization
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: UserRole,
    #[serde(alias = "created_at", with = "timestamp")]
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub disabled: bool,
}

impl AdminResource for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.email
    }
}

/// Partial update for `POST /organization/users/{user_id}`
///
/// Unset fields are omitted from the request body, not sent as null.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl UserUpdate {
    pub fn role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Default::default()
        }
    }

    pub fn disabled(disabled: bool) -> Self {
        Self {
            disabled: Some(disabled),
            ..Default::default()
        }
    }

    /// True when no field would be sent
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.disabled.is_none()
    }
}
