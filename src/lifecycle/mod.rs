//! Managed-resource lifecycle with drift handling
//!
//! An orchestrator (a provisioning tool, a sync job, the CLI) drives each
//! resource through create / read / update / delete / import. Two rules
//! apply to every implementation:
//!
//! - `read` returns `Ok(None)` when the server answers 404: the resource
//!   drifted away and should be dropped from the caller's state.
//! - `delete` treats 404 as success: the resource is already gone.

mod id;
mod invite;
mod project;
mod project_user;
mod service_account;
mod user;

use async_trait::async_trait;
use log::info;

use crate::error::{AdminError, Result};

pub use id::ProjectScopedId;
pub use invite::{InviteConfig, InviteResource};
pub use project::{ProjectConfig, ProjectResource};
pub use project_user::{ProjectUserConfig, ProjectUserResource, ProjectUserState};
pub use service_account::{ServiceAccountConfig, ServiceAccountResource, ServiceAccountState};
pub use user::{UserConfig, UserResource};

/// A remote resource managed through its full lifecycle
#[async_trait]
pub trait ManagedResource: Send + Sync {
    /// Desired configuration
    type Config: Send + Sync;
    /// Observed state
    type State: Send;
    /// Identity used by read, update, delete and import
    type Id: Send + Sync + std::fmt::Display;

    /// Resource kind used in messages (e.g. "invite")
    fn kind(&self) -> &'static str;

    /// Parse the textual id given to import
    fn parse_id(&self, raw: &str) -> Result<Self::Id>;

    async fn create(&self, config: &Self::Config) -> Result<Self::State>;

    /// Current state, or `None` if the resource no longer exists
    async fn read(&self, id: &Self::Id) -> Result<Option<Self::State>>;

    async fn update(&self, id: &Self::Id, config: &Self::Config) -> Result<Self::State>;

    /// Remove the resource; an already missing resource is not an error
    async fn delete(&self, id: &Self::Id) -> Result<()>;

    /// Adopt an existing resource by its textual id
    async fn import(&self, raw: &str) -> Result<Self::State> {
        let id = self.parse_id(raw)?;
        match self.read(&id).await? {
            Some(state) => Ok(state),
            None => Err(AdminError::NotFound {
                resource: format!("{} '{}' to import", self.kind(), id),
            }),
        }
    }
}

/// Map a NotFound result to `None`, logging the drift
pub fn absent_on_not_found<T>(result: Result<T>, what: &str) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            info!("{} no longer exists, dropping it from state", what);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Treat NotFound during deletion as success
pub fn ok_if_gone(result: Result<()>, what: &str) -> Result<()> {
    match result {
        Err(e) if e.is_not_found() => {
            info!("{} was already deleted", what);
            Ok(())
        }
        other => other,
    }
}

/// Reject blank ids before they reach a URL
pub(crate) fn parse_plain_id(raw: &str, kind: &str) -> Result<String> {
    let id = raw.trim();
    if id.is_empty() || id.contains('/') {
        return Err(AdminError::Config(format!(
            "Invalid {} ID '{}': expected a single non-empty ID",
            kind, raw
        )));
    }
    Ok(id.to_string())
}

/// Rewrap a NotFound from an update so the caller learns the resource vanished
pub(crate) fn vanished_during_update<T>(result: Result<T>, what: &str) -> Result<T> {
    result.map_err(|e| {
        if e.is_not_found() {
            AdminError::NotFound {
                resource: format!("{} (it may have been deleted outside of oaiadmin)", what),
            }
        } else {
            e
        }
    })
}
