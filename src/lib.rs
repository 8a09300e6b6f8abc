//! oaiadmin - Manage an OpenAI organization through the admin API
//!
//! Typed client, resource lifecycle and CLI for the organization admin
//! endpoints.
//!
//! # Features
//!
//! - Invites, projects, project API keys, service accounts, project users
//!   and users
//! - Transparent cursor pagination for every list endpoint
//! - Drift-tolerant create/read/update/delete/import lifecycle
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # List projects
//! oaiadmin get prj
//!
//! # Invite a user as owner
//! oaiadmin create invite --email alice@example.com --role owner
//!
//! # Show API keys of a project as JSON
//! oaiadmin get keys -p proj_abc -o json
//!
//! # Archive a project without prompting
//! oaiadmin archive project proj_abc -y
//! ```

pub mod admin;
pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod lookup;
pub mod output;
pub mod ui;

pub use admin::{
    AdminClient, AdminResource, ApiKeyOwner, ClientConfig, CreatedServiceAccount, Invite,
    InviteRole, InviteStatus, Project, ProjectApiKey, ProjectServiceAccount, ProjectStatus,
    ProjectUser, ProjectUserRole, ServiceAccountApiKey, ServiceAccountRole, User, UserRole,
    UserUpdate,
};
pub use cli::{
    ArchiveResource, Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat,
    UpdateResource,
};
pub use error::{AdminError, Result};
pub use lifecycle::{ManagedResource, ProjectScopedId};
