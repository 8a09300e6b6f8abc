//! Update command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::admin::{ProjectUserRole, UserRole};

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Rename a project
    #[command(visible_alias = "prj")]
    Project(UpdateProjectArgs),

    /// Change a project member's role
    #[command(visible_alias = "member")]
    ProjectUser(UpdateProjectUserArgs),

    /// Change an organization user's role or disabled flag
    User(UpdateUserArgs),
}

/// Arguments for 'update project' subcommand
#[derive(Parser, Debug)]
pub struct UpdateProjectArgs {
    /// Project ID
    pub id: String,

    /// New project name
    #[arg(long)]
    pub name: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'update project-user' subcommand
#[derive(Parser, Debug)]
pub struct UpdateProjectUserArgs {
    /// Project ID
    #[arg(short, long)]
    pub project: String,

    /// User ID
    #[arg(short, long)]
    pub user: String,

    /// New project role (member, owner)
    #[arg(long)]
    pub role: ProjectUserRole,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'update user' subcommand
#[derive(Parser, Debug)]
pub struct UpdateUserArgs {
    /// User ID
    pub id: String,

    /// New organization role (reader, owner)
    #[arg(long, required_unless_present = "disabled")]
    pub role: Option<UserRole>,

    /// Disable (true) or re-enable (false) the user
    #[arg(long, value_name = "BOOL")]
    pub disabled: Option<bool>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
