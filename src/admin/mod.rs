//! OpenAI organization admin API module
//!
//! Typed access to the `/organization/*` endpoints: invites, projects,
//! project API keys, service accounts, project users and users.

pub(crate) mod client;
pub mod invites;
pub mod project_api_keys;
pub mod project_users;
pub mod projects;
pub mod service_accounts;
pub mod settings;
pub mod timestamp;
pub mod traits;
pub mod users;

pub use client::AdminClient;
pub use invites::{
    run_create_invite_command, run_delete_invite_command, run_get_invite_command, Invite,
    InviteRole, InviteStatus,
};
pub use project_api_keys::{
    run_delete_api_key_command, run_get_api_key_command, ApiKeyOwner, ApiKeyServiceAccount,
    ApiKeyUser, OwnerRecord, ProjectApiKey, ProjectApiKeyRecord,
};
pub use project_users::{
    run_add_project_user_command, run_get_project_user_command, run_remove_project_user_command,
    run_update_project_user_command, ProjectUser, ProjectUserRole,
};
pub use projects::{
    run_archive_project_command, run_create_project_command, run_get_project_command,
    run_update_project_command, Project, ProjectStatus,
};
pub use service_accounts::{
    run_create_service_account_command, run_delete_service_account_command,
    run_get_service_account_command, CreatedServiceAccount, ProjectServiceAccount,
    ServiceAccountApiKey, ServiceAccountRole,
};
pub use settings::ClientConfig;
pub use traits::{AdminResource, ListPage};
pub use users::{
    run_delete_user_command, run_get_user_command, run_update_user_command, User, UserRole,
    UserUpdate,
};
