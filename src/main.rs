//! oaiadmin - Main entry point

use std::time::Duration;

use clap::Parser;
use log::{debug, info};
use tokio_util::sync::CancellationToken;

use oaiadmin::admin::{
    run_add_project_user_command, run_archive_project_command, run_create_invite_command,
    run_create_project_command, run_create_service_account_command, run_delete_api_key_command,
    run_delete_invite_command, run_delete_service_account_command, run_delete_user_command,
    run_get_api_key_command, run_get_invite_command, run_get_project_command,
    run_get_project_user_command, run_get_service_account_command, run_get_user_command,
    run_remove_project_user_command, run_update_project_command, run_update_project_user_command,
    run_update_user_command,
};
use oaiadmin::{
    AdminClient, ArchiveResource, Cli, ClientConfig, Command, CreateResource, DeleteResource,
    GetResource, UpdateResource,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting oaiadmin v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::resolve(cli.admin_token.as_deref(), cli.base_url.as_deref())?;

    let cancel = CancellationToken::new();
    if let Some(secs) = cli.timeout {
        debug!("Cancelling API calls after {}s", secs);
        let timer = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            timer.cancel();
        });
    }
    let client = AdminClient::new(config).with_cancellation(cancel);

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Invite(_) => run_get_invite_command(&client, cli).await,
            GetResource::Project(_) => run_get_project_command(&client, cli).await,
            GetResource::ApiKey(_) => run_get_api_key_command(&client, cli).await,
            GetResource::ServiceAccount(_) => run_get_service_account_command(&client, cli).await,
            GetResource::ProjectUser(_) => run_get_project_user_command(&client, cli).await,
            GetResource::User(_) => run_get_user_command(&client, cli).await,
        },
        Command::Create { resource } => match resource {
            CreateResource::Invite(_) => run_create_invite_command(&client, cli).await,
            CreateResource::Project(_) => run_create_project_command(&client, cli).await,
            CreateResource::ServiceAccount(_) => {
                run_create_service_account_command(&client, cli).await
            }
            CreateResource::ProjectUser(_) => run_add_project_user_command(&client, cli).await,
        },
        Command::Update { resource } => match resource {
            UpdateResource::Project(_) => run_update_project_command(&client, cli).await,
            UpdateResource::ProjectUser(_) => run_update_project_user_command(&client, cli).await,
            UpdateResource::User(_) => run_update_user_command(&client, cli).await,
        },
        Command::Delete { resource } => match resource {
            DeleteResource::Invite(_) => run_delete_invite_command(&client, cli).await,
            DeleteResource::ApiKey(_) => run_delete_api_key_command(&client, cli).await,
            DeleteResource::ServiceAccount(_) => {
                run_delete_service_account_command(&client, cli).await
            }
            DeleteResource::ProjectUser(_) => run_remove_project_user_command(&client, cli).await,
            DeleteResource::User(_) => run_delete_user_command(&client, cli).await,
        },
        Command::Archive { resource } => match resource {
            ArchiveResource::Project(_) => run_archive_project_command(&client, cli).await,
        },
    }
}
