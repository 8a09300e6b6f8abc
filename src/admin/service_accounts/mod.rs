//! Project service accounts module

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_service_account_command, run_delete_service_account_command,
    run_get_service_account_command,
};
pub use models::{
    CreatedServiceAccount, ProjectServiceAccount, ServiceAccountApiKey, ServiceAccountRole,
};
