//! Organization users module

mod api;
mod commands;
mod models;

pub use commands::{run_delete_user_command, run_get_user_command, run_update_user_command};
pub use models::{User, UserRole, UserUpdate};
