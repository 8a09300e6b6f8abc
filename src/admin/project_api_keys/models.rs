//! Project API key data models
//!
//! The wire `owner` object carries a `type` tag plus one optional payload per
//! owner kind. It is decoded into [`OwnerRecord`] first and then checked into
//! the [`ApiKeyOwner`] sum type, so a key never holds zero or two owners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::timestamp;
use crate::admin::traits::AdminResource;
use crate::admin::{ServiceAccountRole, UserRole};
use crate::error::AdminError;

const OWNER_USER: &str = "user";
const OWNER_SERVICE_ACCOUNT: &str = "service_account";

/// User owning an API key
///
/// The role arrives in either the organization (`reader`/`owner`) or the
/// project (`member`/`owner`) vocabulary; [`UserRole`] accepts both.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiKeyUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub role: UserRole,
    #[serde(alias = "added_at", with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Service account owning an API key
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiKeyServiceAccount {
    pub id: String,
    pub name: String,
    pub role: ServiceAccountRole,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Owner object exactly as the API sends it
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OwnerRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ApiKeyUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<ApiKeyServiceAccount>,
}

/// Owner of a project API key: exactly one of user or service account
#[derive(Debug, Clone, PartialEq)]
pub enum ApiKeyOwner {
    User(ApiKeyUser),
    ServiceAccount(ApiKeyServiceAccount),
}

impl ApiKeyOwner {
    /// Wire tag of the owner kind
    pub fn kind(&self) -> &'static str {
        match self {
            ApiKeyOwner::User(_) => OWNER_USER,
            ApiKeyOwner::ServiceAccount(_) => OWNER_SERVICE_ACCOUNT,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ApiKeyOwner::User(user) => &user.id,
            ApiKeyOwner::ServiceAccount(account) => &account.id,
        }
    }

    /// Display name; users fall back to their email
    pub fn display_name(&self) -> &str {
        match self {
            ApiKeyOwner::User(user) => user.name.as_deref().unwrap_or(&user.email),
            ApiKeyOwner::ServiceAccount(account) => &account.name,
        }
    }

    pub fn role(&self) -> String {
        match self {
            ApiKeyOwner::User(user) => user.role.to_string(),
            ApiKeyOwner::ServiceAccount(account) => account.role.to_string(),
        }
    }

    pub fn user(&self) -> Option<&ApiKeyUser> {
        match self {
            ApiKeyOwner::User(user) => Some(user),
            ApiKeyOwner::ServiceAccount(_) => None,
        }
    }

    pub fn service_account(&self) -> Option<&ApiKeyServiceAccount> {
        match self {
            ApiKeyOwner::ServiceAccount(account) => Some(account),
            ApiKeyOwner::User(_) => None,
        }
    }
}

impl TryFrom<OwnerRecord> for ApiKeyOwner {
    type Error = AdminError;

    fn try_from(record: OwnerRecord) -> Result<Self, Self::Error> {
        match (record.kind.as_str(), record.user, record.service_account) {
            (OWNER_USER, Some(user), None) => Ok(ApiKeyOwner::User(user)),
            (OWNER_SERVICE_ACCOUNT, None, Some(account)) => {
                Ok(ApiKeyOwner::ServiceAccount(account))
            }
            (OWNER_USER | OWNER_SERVICE_ACCOUNT, Some(_), Some(_)) => {
                Err(AdminError::OwnerMismatch(format!(
                    "owner tagged '{}' carries both user and service_account payloads",
                    record.kind
                )))
            }
            (OWNER_USER | OWNER_SERVICE_ACCOUNT, _, _) => Err(AdminError::OwnerMismatch(format!(
                "owner tagged '{}' has no '{}' payload",
                record.kind, record.kind
            ))),
            (other, _, _) => Err(AdminError::OwnerMismatch(format!(
                "unknown owner type '{}'",
                other
            ))),
        }
    }
}

impl From<ApiKeyOwner> for OwnerRecord {
    fn from(owner: ApiKeyOwner) -> Self {
        match owner {
            ApiKeyOwner::User(user) => OwnerRecord {
                kind: OWNER_USER.to_string(),
                user: Some(user),
                service_account: None,
            },
            ApiKeyOwner::ServiceAccount(account) => OwnerRecord {
                kind: OWNER_SERVICE_ACCOUNT.to_string(),
                user: None,
                service_account: Some(account),
            },
        }
    }
}

/// Project API key exactly as the API sends it
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ProjectApiKeyRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub redacted_value: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub owner: OwnerRecord,
}

impl AdminResource for ProjectApiKeyRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.redacted_value)
    }
}

/// Project API key with a validated owner
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(into = "ProjectApiKeyRecord")]
pub struct ProjectApiKey {
    pub id: String,
    pub name: Option<String>,
    pub redacted_value: String,
    pub created_at: DateTime<Utc>,
    pub owner: ApiKeyOwner,
}

impl AdminResource for ProjectApiKey {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.redacted_value)
    }
}

impl TryFrom<ProjectApiKeyRecord> for ProjectApiKey {
    type Error = AdminError;

    fn try_from(record: ProjectApiKeyRecord) -> Result<Self, Self::Error> {
        let owner = ApiKeyOwner::try_from(record.owner).map_err(|e| match e {
            AdminError::OwnerMismatch(msg) => {
                AdminError::OwnerMismatch(format!("API key '{}': {}", record.id, msg))
            }
            other => other,
        })?;

        Ok(ProjectApiKey {
            id: record.id,
            name: record.name,
            redacted_value: record.redacted_value,
            created_at: record.created_at,
            owner,
        })
    }
}

impl From<ProjectApiKey> for ProjectApiKeyRecord {
    fn from(key: ProjectApiKey) -> Self {
        ProjectApiKeyRecord {
            id: key.id,
            name: key.name,
            redacted_value: key.redacted_value,
            created_at: key.created_at,
            owner: key.owner.into(),
        }
    }
}
