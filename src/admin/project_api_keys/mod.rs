//! Project API keys module - read and revoke keys issued inside a project

mod api;
mod commands;
mod models;

pub use commands::{run_delete_api_key_command, run_get_api_key_command};
pub use models::{
    ApiKeyOwner, ApiKeyServiceAccount, ApiKeyUser, OwnerRecord, ProjectApiKey, ProjectApiKeyRecord,
};
