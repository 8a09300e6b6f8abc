//! Project API key command handlers

use log::debug;

use crate::admin::AdminClient;
use crate::lifecycle::ok_if_gone;
use crate::lookup::find_project_api_key;
use crate::output::{output_api_keys, Shape};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command, DeleteResource, GetResource};

/// Run the get api-key command
pub async fn run_get_api_key_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::ApiKey(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching API key '{}'...", id), cli.batch);
        let key = find_project_api_key(client, &args.project, id).await;
        finish_spinner(spinner);

        let key = key?.ok_or_else(|| {
            format!("API key '{}' not found in project '{}'", id, args.project)
        })?;
        output_api_keys(&[key], args.output, cli.no_header, Shape::Single);
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Fetching API keys of project '{}'...", args.project),
        cli.batch,
    );
    let keys = client.list_project_api_keys(&args.project).await;
    finish_spinner(spinner);
    let keys = keys?;

    debug!("Listing {} API key(s)", keys.len());
    if keys.is_empty() && !args.output.is_structured() {
        eprintln!("No API keys found in project '{}'", args.project);
    } else {
        output_api_keys(&keys, args.output, cli.no_header, Shape::List);
    }
    Ok(())
}

/// Run the delete api-key command
pub async fn run_delete_api_key_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::ApiKey(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!(
        "Revoke API key '{}' in project '{}'?",
        args.id, args.project
    );
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Revoking API key '{}'...", args.id), cli.batch);
    let result = client
        .delete_project_api_key(&args.project, &args.id)
        .await;
    finish_spinner(spinner);
    ok_if_gone(
        result,
        &format!("API key '{}' in project '{}'", args.id, args.project),
    )?;

    println!("✓ Revoked API key '{}'", args.id);
    Ok(())
}
