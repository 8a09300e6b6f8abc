//! Project command handlers

use log::debug;

use crate::admin::AdminClient;
use crate::lifecycle::{ManagedResource, ProjectConfig, ProjectResource};
use crate::lookup::find_project;
use crate::output::{output_projects, Shape};
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{ArchiveResource, Cli, Command, CreateResource, GetResource, UpdateResource};

/// Run the get project command
pub async fn run_get_project_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Project(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching project '{}'...", id), cli.batch);
        let project = find_project(client, id).await;
        finish_spinner(spinner);

        let project = project?.ok_or_else(|| format!("Project '{}' not found", id))?;
        output_projects(&[project], args.output, cli.no_header, Shape::Single);
        return Ok(());
    }

    let spinner = create_spinner("Fetching projects...", cli.batch);
    let projects = client.list_projects().await;
    finish_spinner(spinner);

    let filter = args.filter.as_deref().map(str::to_lowercase);
    let projects: Vec<_> = projects?
        .into_iter()
        .filter(|p| !args.active || !p.is_archived())
        .filter(|p| match &filter {
            Some(f) => p.name.to_lowercase().contains(f) || p.id == *f,
            None => true,
        })
        .collect();

    debug!("Listing {} project(s)", projects.len());
    if projects.is_empty() && !args.output.is_structured() {
        eprintln!("No projects found");
    } else {
        output_projects(&projects, args.output, cli.no_header, Shape::List);
    }
    Ok(())
}

/// Run the create project command
pub async fn run_create_project_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Project(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = ProjectResource::new(client.clone());
    let spinner = create_spinner(&format!("Creating project '{}'...", args.name), cli.batch);
    let project = resource
        .create(&ProjectConfig {
            name: args.name.clone(),
        })
        .await;
    finish_spinner(spinner);

    output_projects(&[project?], args.output, cli.no_header, Shape::Single);
    Ok(())
}

/// Run the update project command (rename)
pub async fn run_update_project_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Project(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = ProjectResource::new(client.clone());
    let id = resource.parse_id(&args.id)?;

    let spinner = create_spinner(&format!("Renaming project '{}'...", id), cli.batch);
    let project = resource
        .update(
            &id,
            &ProjectConfig {
                name: args.name.clone(),
            },
        )
        .await;
    finish_spinner(spinner);

    output_projects(&[project?], args.output, cli.no_header, Shape::Single);
    Ok(())
}

/// Run the archive project command
///
/// Archiving is the only way to remove a project and cannot be undone.
pub async fn run_archive_project_command(
    client: &AdminClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Archive {
        resource: ArchiveResource::Project(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = ProjectResource::new(client.clone());
    let id = resource.parse_id(&args.id)?;

    let prompt = format!("Archive project '{}'? This cannot be undone", id);
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Archiving project '{}'...", id), cli.batch);
    let result = resource.delete(&id).await;
    finish_spinner(spinner);
    result?;

    println!("✓ Archived project '{}'", id);
    Ok(())
}
