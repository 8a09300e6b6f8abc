//! Project output formatter

use serde::Serialize;

use super::{output_rows, Shape, TableRow};
use crate::admin::timestamp::{format_optional, format_rfc3339};
use crate::admin::Project;
use crate::cli::OutputFormat;

/// Serializable project for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableProject {
    id: String,
    name: String,
    status: String,
    created_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    archived_at: String,
}

impl From<&Project> for SerializableProject {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            status: project.status.to_string(),
            created_at: format_rfc3339(&project.created_at),
            archived_at: format_optional(project.archived_at.as_ref()),
        }
    }
}

impl TableRow for SerializableProject {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "STATUS", "CREATED", "ARCHIVED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.status.clone(),
            self.created_at.clone(),
            self.archived_at.clone(),
        ]
    }
}

/// Output projects in the specified format
pub fn output_projects(projects: &[Project], format: OutputFormat, no_header: bool, shape: Shape) {
    let rows: Vec<SerializableProject> = projects.iter().map(SerializableProject::from).collect();
    output_rows(&rows, format, no_header, shape);
}
