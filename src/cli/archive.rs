//! Archive command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'archive' command
#[derive(Subcommand, Debug)]
pub enum ArchiveResource {
    /// Archive a project (cannot be undone)
    #[command(visible_alias = "prj")]
    Project(ArchiveProjectArgs),
}

/// Arguments for 'archive project' subcommand
#[derive(Parser, Debug)]
pub struct ArchiveProjectArgs {
    /// Project ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
