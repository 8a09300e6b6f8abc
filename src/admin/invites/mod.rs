//! Organization invite module

mod api;
mod commands;
mod models;

pub use commands::{run_create_invite_command, run_delete_invite_command, run_get_invite_command};
pub use models::{Invite, InviteRole, InviteStatus};
