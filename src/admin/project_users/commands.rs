//! Project user command handlers

use log::debug;

use crate::admin::AdminClient;
use crate::lifecycle::{ManagedResource, ProjectScopedId, ProjectUserConfig, ProjectUserResource};
use crate::lookup::find_project_user;
use crate::output::{output_project_users, Shape};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command, CreateResource, DeleteResource, GetResource, UpdateResource};

/// Run the get project-user command
pub async fn run_get_project_user_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::ProjectUser(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(user_id) = &args.user_id {
        let spinner = create_spinner(
            &format!("Fetching user '{}' of project '{}'...", user_id, args.project),
            cli.batch,
        );
        let user = find_project_user(client, &args.project, user_id).await;
        finish_spinner(spinner);

        let user = user?.ok_or_else(|| {
            format!(
                "User '{}' is not a member of project '{}'",
                user_id, args.project
            )
        })?;
        output_project_users(
            &args.project,
            &[user],
            args.output,
            cli.no_header,
            Shape::Single,
        );
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Fetching users of project '{}'...", args.project),
        cli.batch,
    );
    let users = client.list_project_users(&args.project).await;
    finish_spinner(spinner);
    let users = users?;

    debug!("Listing {} project user(s)", users.len());
    if users.is_empty() && !args.output.is_structured() {
        eprintln!("No users found in project '{}'", args.project);
    } else {
        output_project_users(&args.project, &users, args.output, cli.no_header, Shape::List);
    }
    Ok(())
}

/// Run the create project-user command
pub async fn run_add_project_user_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::ProjectUser(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = ProjectUserResource::new(client.clone());
    let config = ProjectUserConfig {
        project_id: args.project.clone(),
        user_id: args.user.clone(),
        role: args.role,
    };

    let spinner = create_spinner(
        &format!("Adding user '{}' to project '{}'...", args.user, args.project),
        cli.batch,
    );
    let state = resource.create(&config).await;
    finish_spinner(spinner);
    let state = state?;

    output_project_users(
        &state.project_id,
        &[state.user],
        args.output,
        cli.no_header,
        Shape::Single,
    );
    Ok(())
}

/// Run the update project-user command (role change)
pub async fn run_update_project_user_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::ProjectUser(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = ProjectUserResource::new(client.clone());
    let id = ProjectScopedId::new(&args.project, &args.user);
    let config = ProjectUserConfig {
        project_id: args.project.clone(),
        user_id: args.user.clone(),
        role: args.role,
    };

    let spinner = create_spinner(
        &format!("Setting role of '{}' in project '{}'...", args.user, args.project),
        cli.batch,
    );
    let state = resource.update(&id, &config).await;
    finish_spinner(spinner);
    let state = state?;

    output_project_users(
        &state.project_id,
        &[state.user],
        args.output,
        cli.no_header,
        Shape::Single,
    );
    Ok(())
}

/// Run the delete project-user command
pub async fn run_remove_project_user_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::ProjectUser(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = ProjectUserResource::new(client.clone());
    let id = ProjectScopedId::new(&args.project, &args.user);

    let prompt = format!(
        "Remove user '{}' from project '{}'?",
        args.user, args.project
    );
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Removing '{}'...", id), cli.batch);
    let result = resource.delete(&id).await;
    finish_spinner(spinner);
    result?;

    println!(
        "✓ Removed user '{}' from project '{}'",
        args.user, args.project
    );
    Ok(())
}
