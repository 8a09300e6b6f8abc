//! Output formatting module
//!
//! Handles the output formats (table, CSV, JSON, YAML) for every resource.
//! Each resource converts into a flat serializable row type implementing
//! [`TableRow`]; the generic printers below do the rest.

mod api_keys;
mod common;
mod invites;
mod project_users;
mod projects;
mod service_accounts;
mod users;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

pub use api_keys::output_api_keys;
pub use common::escape_csv;
pub use invites::output_invites;
pub use project_users::output_project_users;
pub use projects::output_projects;
pub use service_accounts::{output_created_service_account, output_service_accounts};
pub use users::output_users;

/// A flattened resource that can be printed in every output format
pub trait TableRow: Serialize {
    /// Column headers for table and CSV output
    fn headers() -> &'static [&'static str];

    /// Cell values, in header order
    fn cells(&self) -> Vec<String>;
}

/// How many resources the caller asked for
///
/// A single resource prints as an object in JSON/YAML, a list as an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    List,
}

/// Print rows in the requested format
pub fn output_rows<R: TableRow>(rows: &[R], format: OutputFormat, no_header: bool, shape: Shape) {
    if format.is_structured() {
        let single = match (shape, rows) {
            (Shape::Single, [row]) => Some(row),
            _ => None,
        };
        match (format, single) {
            (OutputFormat::Yaml, Some(row)) => common::print_yaml(row),
            (OutputFormat::Yaml, None) => common::print_yaml(rows),
            (_, Some(row)) => common::print_json(row),
            (_, None) => common::print_json(rows),
        }
        return;
    }

    match format {
        OutputFormat::Csv => print!("{}", render_csv(rows, no_header)),
        _ => println!("{}", render_table(rows, no_header)),
    }
}

fn render_table<R: TableRow>(rows: &[R], no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(R::headers().to_vec());
    }
    for row in rows {
        table.add_row(row.cells());
    }
    table
}

fn render_csv<R: TableRow>(rows: &[R], no_header: bool) -> String {
    let mut out = String::new();
    if !no_header {
        out.push_str(&R::headers().join(","));
        out.push('\n');
    }
    for row in rows {
        let cells: Vec<String> = row.cells().iter().map(|c| escape_csv(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}
