//! Invite command handlers

use log::debug;

use crate::admin::AdminClient;
use crate::lifecycle::{InviteConfig, InviteResource, ManagedResource};
use crate::lookup::{find_invite, invites_by_email};
use crate::output::{output_invites, Shape};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command, CreateResource, DeleteResource, GetResource};

/// Run the get invite command
pub async fn run_get_invite_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Invite(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching invite '{}'...", id), cli.batch);
        let invite = find_invite(client, id).await;
        finish_spinner(spinner);

        let invite = invite?.ok_or_else(|| format!("Invite '{}' not found", id))?;
        output_invites(&[invite], args.output, cli.no_header, Shape::Single);
        return Ok(());
    }

    let spinner = create_spinner("Fetching invites...", cli.batch);
    let invites = match &args.email {
        Some(email) => invites_by_email(client, email, args.status).await,
        None => client.list_invites().await.map(|invites| {
            invites
                .into_iter()
                .filter(|invite| args.status.map_or(true, |s| invite.status == s))
                .collect::<Vec<_>>()
        }),
    };
    finish_spinner(spinner);
    let invites = invites?;

    debug!("Listing {} invite(s)", invites.len());
    if invites.is_empty() && !args.output.is_structured() {
        eprintln!("No invites found");
    } else {
        output_invites(&invites, args.output, cli.no_header, Shape::List);
    }
    Ok(())
}

/// Run the create invite command
pub async fn run_create_invite_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Invite(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = InviteResource::new(client.clone());
    let config = InviteConfig {
        email: args.email.clone(),
        role: args.role,
    };

    let spinner = create_spinner(&format!("Inviting {}...", args.email), cli.batch);
    let invite = resource.create(&config).await;
    finish_spinner(spinner);

    output_invites(&[invite?], args.output, cli.no_header, Shape::Single);
    Ok(())
}

/// Run the delete invite command
pub async fn run_delete_invite_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Invite(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = InviteResource::new(client.clone());
    let id = resource.parse_id(&args.id)?;

    let prompt = format!("Delete invite '{}'?", id);
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting invite '{}'...", id), cli.batch);
    let result = resource.delete(&id).await;
    finish_spinner(spinner);
    result?;

    println!("✓ Deleted invite '{}'", id);
    Ok(())
}
