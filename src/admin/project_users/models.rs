//! Project user data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::timestamp;
use crate::admin::traits::{parse_wire_enum, AdminResource};

/// Role of a user within a project
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectUserRole {
    Member,
    Owner,
}

impl std::fmt::Display for ProjectUserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectUserRole::Member => write!(f, "member"),
            ProjectUserRole::Owner => write!(f, "owner"),
        }
    }
}

impl std::str::FromStr for ProjectUserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire_enum(s, "project user role")
    }
}

/// Membership of a user in a project
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ProjectUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub role: ProjectUserRole,
    #[serde(with = "timestamp")]
    pub added_at: DateTime<Utc>,
}

impl AdminResource for ProjectUser {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.email
    }
}

/// Request body for `POST /organization/projects/{project_id}/users`
#[derive(Serialize, Debug)]
pub(crate) struct ProjectUserAddRequest<'a> {
    pub user_id: &'a str,
    pub role: ProjectUserRole,
}

/// Request body for `POST /organization/projects/{project_id}/users/{user_id}`
#[derive(Serialize, Debug)]
pub(crate) struct ProjectUserRoleRequest {
    pub role: ProjectUserRole,
}
