//! Service account data models

use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::admin::timestamp;
use crate::admin::traits::{parse_wire_enum, AdminResource};

/// Role of a service account within its project
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceAccountRole {
    #[serde(alias = "viewer")]
    Member,
    #[serde(alias = "editor")]
    Owner,
    Admin,
}

impl std::fmt::Display for ServiceAccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceAccountRole::Member => write!(f, "member"),
            ServiceAccountRole::Owner => write!(f, "owner"),
            ServiceAccountRole::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for ServiceAccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire_enum(s, "service account role")
    }
}

/// Service account bound to a project
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ProjectServiceAccount {
    pub id: String,
    pub name: String,
    /// Not always echoed by the server; filled from the request path
    #[serde(default)]
    pub project_id: String,
    pub role: ServiceAccountRole,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl AdminResource for ProjectServiceAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl ProjectServiceAccount {
    pub(crate) fn with_project(mut self, project_id: &str) -> Self {
        if self.project_id.is_empty() {
            self.project_id = project_id.to_string();
        }
        self
    }
}

/// API key issued together with a new service account
///
/// Only returned by the create call; the value cannot be fetched again.
#[derive(Deserialize, Debug)]
pub struct ServiceAccountApiKey {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub value: Secret<String>,
}

/// Response of `POST /organization/projects/{project_id}/service_accounts`
#[derive(Deserialize, Debug)]
pub struct CreatedServiceAccount {
    #[serde(flatten)]
    pub account: ProjectServiceAccount,
    pub api_key: ServiceAccountApiKey,
}

/// Request body for service account creation
#[derive(Serialize, Debug)]
pub(crate) struct ServiceAccountCreateRequest<'a> {
    pub name: &'a str,
}
