//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Revoke an organization invite
    Invite(DeleteInviteArgs),

    /// Revoke a project API key
    #[command(visible_alias = "key")]
    ApiKey(DeleteApiKeyArgs),

    /// Delete a project service account
    #[command(visible_alias = "sa")]
    ServiceAccount(DeleteServiceAccountArgs),

    /// Remove a user from a project
    #[command(visible_alias = "member")]
    ProjectUser(DeleteProjectUserArgs),

    /// Remove a user from the organization
    User(DeleteUserArgs),
}

/// Arguments for 'delete invite' subcommand
#[derive(Parser, Debug)]
pub struct DeleteInviteArgs {
    /// Invite ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete api-key' subcommand
#[derive(Parser, Debug)]
pub struct DeleteApiKeyArgs {
    /// API key ID
    pub id: String,

    /// Project ID the key belongs to
    #[arg(short, long)]
    pub project: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete service-account' subcommand
#[derive(Parser, Debug)]
pub struct DeleteServiceAccountArgs {
    /// Service account ID
    pub id: String,

    /// Project ID the account belongs to
    #[arg(short, long)]
    pub project: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete project-user' subcommand
#[derive(Parser, Debug)]
pub struct DeleteProjectUserArgs {
    /// Project ID
    #[arg(short, long)]
    pub project: String,

    /// User ID
    #[arg(short, long)]
    pub user: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete user' subcommand
#[derive(Parser, Debug)]
pub struct DeleteUserArgs {
    /// User ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
