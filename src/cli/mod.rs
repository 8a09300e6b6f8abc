//! CLI argument parsing

mod archive;
mod common;
mod create;
mod delete;
mod get;
mod update;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use archive::{ArchiveProjectArgs, ArchiveResource};
pub use common::OutputFormat;
pub use create::{
    CreateInviteArgs, CreateProjectArgs, CreateProjectUserArgs, CreateResource,
    CreateServiceAccountArgs,
};
pub use delete::{
    DeleteApiKeyArgs, DeleteInviteArgs, DeleteProjectUserArgs, DeleteResource,
    DeleteServiceAccountArgs, DeleteUserArgs,
};
pub use get::{
    GetApiKeyArgs, GetInviteArgs, GetProjectArgs, GetProjectUserArgs, GetResource,
    GetServiceAccountArgs, GetUserArgs,
};
pub use update::{UpdateProjectArgs, UpdateProjectUserArgs, UpdateResource, UpdateUserArgs};

/// OpenAI organization admin CLI
#[derive(Parser, Debug)]
#[command(name = "oaiadmin")]
#[command(version)]
#[command(
    about = "Manage OpenAI organization invites, projects, keys, service accounts and users",
    long_about = None
)]
pub struct Cli {
    /// Admin API key (overrides OPENAI_ADMIN_TOKEN)
    #[arg(short = 't', long, global = true)]
    pub admin_token: Option<String>,

    /// API base URL (overrides OPENAI_BASE_URL, default https://api.openai.com/v1)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Abort in-flight API calls after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or show resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Modify resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete resources (already deleted resources are not an error)
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Archive resources (one-way)
    Archive {
        #[command(subcommand)]
        resource: ArchiveResource,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{InviteRole, InviteStatus, ProjectUserRole, UserRole};

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["oaiadmin", "get", "projects"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.admin_token.is_none());
        assert!(cli.base_url.is_none());
        assert!(!cli.batch);
        assert!(!cli.no_header);
        assert!(cli.timeout.is_none());
        match cli.command {
            Command::Get {
                resource: GetResource::Project(args),
            } => {
                assert!(args.id.is_none());
                assert_eq!(args.output, OutputFormat::Table);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "oaiadmin",
            "get",
            "users",
            "--admin-token",
            "sk-admin",
            "--base-url",
            "http://localhost:8080/v1",
            "--batch",
            "--timeout",
            "30",
        ]);
        assert_eq!(cli.admin_token.as_deref(), Some("sk-admin"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert!(cli.batch);
        assert_eq!(cli.timeout, Some(30));
    }

    #[test]
    fn test_get_invite_with_status_filter() {
        let cli = Cli::parse_from([
            "oaiadmin", "get", "invite", "--email", "a@x.com", "--status", "pending", "-o", "json",
        ]);
        let Command::Get {
            resource: GetResource::Invite(args),
        } = cli.command
        else {
            panic!("Expected get invite");
        };
        assert_eq!(args.email.as_deref(), Some("a@x.com"));
        assert_eq!(args.status, Some(InviteStatus::Pending));
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_create_invite_role_alias() {
        let cli = Cli::parse_from([
            "oaiadmin", "create", "invite", "--email", "a@x.com", "--role", "admin",
        ]);
        let Command::Create {
            resource: CreateResource::Invite(args),
        } = cli.command
        else {
            panic!("Expected create invite");
        };
        assert_eq!(args.role, InviteRole::Owner);
    }

    #[test]
    fn test_create_invite_default_role() {
        let cli = Cli::parse_from(["oaiadmin", "create", "invite", "--email", "a@x.com"]);
        let Command::Create {
            resource: CreateResource::Invite(args),
        } = cli.command
        else {
            panic!("Expected create invite");
        };
        assert_eq!(args.role, InviteRole::Reader);
    }

    #[test]
    fn test_invalid_role_rejected() {
        let result = Cli::try_parse_from([
            "oaiadmin",
            "create",
            "project-user",
            "--project",
            "proj_1",
            "--user",
            "user_1",
            "--role",
            "admin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_project_user() {
        let cli = Cli::parse_from([
            "oaiadmin",
            "update",
            "project-user",
            "--project",
            "proj_1",
            "--user",
            "user_1",
            "--role",
            "owner",
        ]);
        let Command::Update {
            resource: UpdateResource::ProjectUser(args),
        } = cli.command
        else {
            panic!("Expected update project-user");
        };
        assert_eq!(args.project, "proj_1");
        assert_eq!(args.role, ProjectUserRole::Owner);
    }

    #[test]
    fn test_update_user_disabled_flag() {
        let cli = Cli::parse_from([
            "oaiadmin", "update", "user", "user_1", "--disabled", "false",
        ]);
        let Command::Update {
            resource: UpdateResource::User(args),
        } = cli.command
        else {
            panic!("Expected update user");
        };
        assert_eq!(args.disabled, Some(false));
        assert!(args.role.is_none());
    }

    #[test]
    fn test_update_user_role_alias() {
        let cli = Cli::parse_from(["oaiadmin", "update", "user", "user_1", "--role", "member"]);
        let Command::Update {
            resource: UpdateResource::User(args),
        } = cli.command
        else {
            panic!("Expected update user");
        };
        assert_eq!(args.role, Some(UserRole::Reader));
    }

    #[test]
    fn test_delete_api_key_requires_project() {
        let result = Cli::try_parse_from(["oaiadmin", "delete", "api-key", "key_1"]);
        assert!(result.is_err());

        let cli = Cli::parse_from([
            "oaiadmin", "delete", "api-key", "key_1", "--project", "proj_1", "-y",
        ]);
        let Command::Delete {
            resource: DeleteResource::ApiKey(args),
        } = cli.command
        else {
            panic!("Expected delete api-key");
        };
        assert_eq!(args.id, "key_1");
        assert!(args.yes);
    }

    #[test]
    fn test_archive_project() {
        let cli = Cli::parse_from(["oaiadmin", "archive", "project", "proj_1"]);
        let Command::Archive {
            resource: ArchiveResource::Project(args),
        } = cli.command
        else {
            panic!("Expected archive project");
        };
        assert_eq!(args.id, "proj_1");
        assert!(!args.yes);
    }

    #[test]
    fn test_resource_aliases() {
        assert!(Cli::try_parse_from(["oaiadmin", "get", "invites"]).is_ok());
        assert!(Cli::try_parse_from(["oaiadmin", "get", "prj"]).is_ok());
        assert!(Cli::try_parse_from(["oaiadmin", "get", "keys", "--project", "p"]).is_ok());
        assert!(Cli::try_parse_from(["oaiadmin", "get", "sa", "--project", "p"]).is_ok());
        assert!(Cli::try_parse_from(["oaiadmin", "get", "members", "--project", "p"]).is_ok());
    }
}
