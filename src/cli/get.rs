//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::admin::InviteStatus;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get organization invites
    #[command(visible_alias = "invites")]
    Invite(GetInviteArgs),

    /// Get projects
    #[command(
        visible_alias = "projects",
        visible_alias = "prj",
        visible_alias = "prjs"
    )]
    Project(GetProjectArgs),

    /// Get API keys of a project
    #[command(
        visible_alias = "api-keys",
        visible_alias = "key",
        visible_alias = "keys"
    )]
    ApiKey(GetApiKeyArgs),

    /// Get service accounts of a project
    #[command(
        visible_alias = "service-accounts",
        visible_alias = "sa",
        visible_alias = "sas"
    )]
    ServiceAccount(GetServiceAccountArgs),

    /// Get users of a project
    #[command(
        visible_alias = "project-users",
        visible_alias = "member",
        visible_alias = "members"
    )]
    ProjectUser(GetProjectUserArgs),

    /// Get organization users
    #[command(visible_alias = "users")]
    User(GetUserArgs),
}

/// Arguments for 'get invite' subcommand
#[derive(Parser, Debug)]
pub struct GetInviteArgs {
    /// Invite ID (if specified, shows details for that invite)
    pub id: Option<String>,

    /// Only invites sent to this email address
    #[arg(long, conflicts_with = "id")]
    pub email: Option<String>,

    /// Only invites in this status (pending, accepted, expired)
    #[arg(long)]
    pub status: Option<InviteStatus>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get project' subcommand
#[derive(Parser, Debug)]
pub struct GetProjectArgs {
    /// Project ID (if specified, shows details for that project)
    pub id: Option<String>,

    /// Filter projects by name (substring match)
    #[arg(short, long, conflicts_with = "id")]
    pub filter: Option<String>,

    /// Hide archived projects
    #[arg(long, default_value_t = false)]
    pub active: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get api-key' subcommand
#[derive(Parser, Debug)]
pub struct GetApiKeyArgs {
    /// API key ID (if specified, shows details for that key)
    pub id: Option<String>,

    /// Project ID (required)
    #[arg(short, long)]
    pub project: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get service-account' subcommand
#[derive(Parser, Debug)]
pub struct GetServiceAccountArgs {
    /// Service account ID (if specified, shows details for that account)
    pub id: Option<String>,

    /// Project ID (required)
    #[arg(short, long)]
    pub project: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get project-user' subcommand
#[derive(Parser, Debug)]
pub struct GetProjectUserArgs {
    /// User ID (if specified, shows that user's membership)
    pub user_id: Option<String>,

    /// Project ID (required)
    #[arg(short, long)]
    pub project: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get user' subcommand
#[derive(Parser, Debug)]
pub struct GetUserArgs {
    /// User ID (if specified, shows details for that user)
    pub id: Option<String>,

    /// Look users up by email (comma-separated or repeated)
    #[arg(long, value_delimiter = ',', conflicts_with = "id")]
    pub email: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
