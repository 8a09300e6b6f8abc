//! Project module

mod api;
mod commands;
mod models;

pub use commands::{
    run_archive_project_command, run_create_project_command, run_get_project_command,
    run_update_project_command,
};
pub use models::{Project, ProjectStatus};
