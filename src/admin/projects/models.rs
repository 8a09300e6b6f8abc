//! Project data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::timestamp;
use crate::admin::traits::AdminResource;

/// Project lifecycle status; archival is one-way
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Archived,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Archived => write!(f, "archived"),
        }
    }
}

/// Project data from the admin API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "archive_at", with = "timestamp::option")]
    pub archived_at: Option<DateTime<Utc>>,
}

impl AdminResource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Project {
    /// Whether the project has been archived
    pub fn is_archived(&self) -> bool {
        self.status == ProjectStatus::Archived
    }
}

/// Request body for project create and modify
#[derive(Serialize, Debug)]
pub(crate) struct ProjectNameRequest<'a> {
    pub name: &'a str,
}
