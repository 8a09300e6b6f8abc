//! User command handlers

use log::debug;

use crate::admin::AdminClient;
use crate::lifecycle::{ManagedResource, UserConfig, UserResource};
use crate::lookup::{find_user, users_by_emails};
use crate::output::{output_users, Shape};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command, DeleteResource, GetResource, UpdateResource};

/// Run the get user command
///
/// With `--email`, only users with exactly those emails are shown; emails
/// with no matching user are reported on stderr.
pub async fn run_get_user_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::User(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching user '{}'...", id), cli.batch);
        let user = find_user(client, id).await;
        finish_spinner(spinner);

        let user = user?.ok_or_else(|| format!("User '{}' not found", id))?;
        output_users(&[user], args.output, cli.no_header, Shape::Single);
        return Ok(());
    }

    let spinner = create_spinner("Fetching users...", cli.batch);
    let result = if args.email.is_empty() {
        client.list_users().await.map(|users| (users, Vec::new()))
    } else {
        users_by_emails(client, &args.email)
            .await
            .map(|result| (result.found.into_values().collect::<Vec<_>>(), result.missing))
    };
    finish_spinner(spinner);
    let (users, missing): (Vec<_>, Vec<String>) = result?;

    for email in &missing {
        eprintln!("No user found with email '{}'", email);
    }

    debug!("Listing {} user(s)", users.len());
    if users.is_empty() && !args.output.is_structured() {
        eprintln!("No users found");
    } else {
        output_users(&users, args.output, cli.no_header, Shape::List);
    }
    Ok(())
}

/// Run the update user command
pub async fn run_update_user_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::User(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = UserResource::new(client.clone());
    let id = resource.parse_id(&args.id)?;
    let config = UserConfig {
        user_id: id.clone(),
        role: args.role,
        disabled: args.disabled,
    };

    let spinner = create_spinner(&format!("Updating user '{}'...", id), cli.batch);
    let user = resource.update(&id, &config).await;
    finish_spinner(spinner);

    output_users(&[user?], args.output, cli.no_header, Shape::Single);
    Ok(())
}

/// Run the delete user command (removes the user from the organization)
pub async fn run_delete_user_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::User(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = UserResource::new(client.clone());
    let id = resource.parse_id(&args.id)?;

    let prompt = format!("Remove user '{}' from the organization?", id);
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Removing user '{}'...", id), cli.batch);
    let result = resource.delete(&id).await;
    finish_spinner(spinner);
    result?;

    println!("✓ Removed user '{}' from the organization", id);
    Ok(())
}
