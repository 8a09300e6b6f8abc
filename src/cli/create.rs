//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::admin::{InviteRole, ProjectUserRole};

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Invite a user to the organization
    Invite(CreateInviteArgs),

    /// Create a project
    #[command(visible_alias = "prj")]
    Project(CreateProjectArgs),

    /// Create a service account (prints its API key once)
    #[command(visible_alias = "sa")]
    ServiceAccount(CreateServiceAccountArgs),

    /// Add an organization user to a project
    #[command(visible_alias = "member")]
    ProjectUser(CreateProjectUserArgs),
}

/// Arguments for 'create invite' subcommand
#[derive(Parser, Debug)]
pub struct CreateInviteArgs {
    /// Email address of the user to invite
    #[arg(long)]
    pub email: String,

    /// Organization role granted on acceptance (reader, owner)
    #[arg(long, default_value = "reader")]
    pub role: InviteRole,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create project' subcommand
#[derive(Parser, Debug)]
pub struct CreateProjectArgs {
    /// Project name
    #[arg(long)]
    pub name: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create service-account' subcommand
#[derive(Parser, Debug)]
pub struct CreateServiceAccountArgs {
    /// Project ID
    #[arg(short, long)]
    pub project: String,

    /// Service account name
    #[arg(long)]
    pub name: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create project-user' subcommand
#[derive(Parser, Debug)]
pub struct CreateProjectUserArgs {
    /// Project ID
    #[arg(short, long)]
    pub project: String,

    /// User ID (user-xxx) of an organization member
    #[arg(short, long)]
    pub user: String,

    /// Project role (member, owner)
    #[arg(long, default_value = "member")]
    pub role: ProjectUserRole,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
