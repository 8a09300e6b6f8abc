//! Service account command handlers

use log::debug;

use crate::admin::{AdminClient, CreatedServiceAccount};
use crate::lifecycle::{
    ManagedResource, ProjectScopedId, ServiceAccountConfig, ServiceAccountResource,
};
use crate::lookup::find_service_account;
use crate::output::{output_created_service_account, output_service_accounts, Shape};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command, CreateResource, DeleteResource, GetResource};

/// Run the get service-account command
pub async fn run_get_service_account_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::ServiceAccount(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching service account '{}'...", id), cli.batch);
        let account = find_service_account(client, &args.project, id).await;
        finish_spinner(spinner);

        let account = account?.ok_or_else(|| {
            format!(
                "Service account '{}' not found in project '{}'",
                id, args.project
            )
        })?;
        output_service_accounts(&[account], args.output, cli.no_header, Shape::Single);
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Fetching service accounts of project '{}'...", args.project),
        cli.batch,
    );
    let accounts = client.list_service_accounts(&args.project).await;
    finish_spinner(spinner);
    let accounts = accounts?;

    debug!("Listing {} service account(s)", accounts.len());
    if accounts.is_empty() && !args.output.is_structured() {
        eprintln!("No service accounts found in project '{}'", args.project);
    } else {
        output_service_accounts(&accounts, args.output, cli.no_header, Shape::List);
    }
    Ok(())
}

/// Run the create service-account command
///
/// Prints the API key once; it cannot be retrieved again.
pub async fn run_create_service_account_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::ServiceAccount(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = ServiceAccountResource::new(client.clone());
    let config = ServiceAccountConfig {
        project_id: args.project.clone(),
        name: args.name.clone(),
    };

    let spinner = create_spinner(
        &format!("Creating service account '{}'...", args.name),
        cli.batch,
    );
    let state = resource.create(&config).await;
    finish_spinner(spinner);
    let state = state?;

    let api_key = state
        .api_key
        .ok_or("Service account was created but the API key was not returned")?;
    let created = CreatedServiceAccount {
        account: state.account,
        api_key,
    };
    output_created_service_account(&created, args.output, cli.no_header);
    Ok(())
}

/// Run the delete service-account command
pub async fn run_delete_service_account_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::ServiceAccount(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = ServiceAccountResource::new(client.clone());
    let id = ProjectScopedId::new(&args.project, &args.id);

    let prompt = format!(
        "Delete service account '{}' and its API keys in project '{}'?",
        args.id, args.project
    );
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Deleting service account '{}'...", args.id),
        cli.batch,
    );
    let result = resource.delete(&id).await;
    finish_spinner(spinner);
    result?;

    println!("✓ Deleted service account '{}'", id);
    Ok(())
}
