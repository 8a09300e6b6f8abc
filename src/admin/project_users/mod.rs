//! Project users module - memberships of organization users in a project

mod api;
mod commands;
mod models;

pub use commands::{
    run_add_project_user_command, run_get_project_user_command, run_remove_project_user_command,
    run_update_project_user_command,
};
pub use models::{ProjectUser, ProjectUserRole};
