//! Composite identity of project-scoped resources

use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;

/// `project_id/resource_id`, the textual id of memberships and service accounts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectScopedId {
    pub project_id: String,
    pub resource_id: String,
}

impl ProjectScopedId {
    pub fn new(project_id: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            resource_id: resource_id.into(),
        }
    }
}

impl fmt::Display for ProjectScopedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project_id, self.resource_id)
    }
}

impl FromStr for ProjectScopedId {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split('/').collect::<Vec<_>>().as_slice() {
            [project_id, resource_id] if !project_id.is_empty() && !resource_id.is_empty() => {
                Ok(Self::new(*project_id, *resource_id))
            }
            _ => Err(AdminError::Config(format!(
                "Invalid ID '{}': expected format project_id/resource_id",
                s
            ))),
        }
    }
}
