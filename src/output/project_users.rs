//! Project user output formatter

use serde::Serialize;

use super::{output_rows, Shape, TableRow};
use crate::admin::timestamp::format_rfc3339;
use crate::admin::ProjectUser;
use crate::cli::OutputFormat;

/// Serializable project member for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableProjectUser {
    project_id: String,
    id: String,
    name: String,
    email: String,
    role: String,
    added_at: String,
}

impl SerializableProjectUser {
    fn new(project_id: &str, user: &ProjectUser) -> Self {
        Self {
            project_id: project_id.to_string(),
            id: user.id.clone(),
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone(),
            role: user.role.to_string(),
            added_at: format_rfc3339(&user.added_at),
        }
    }
}

impl TableRow for SerializableProjectUser {
    fn headers() -> &'static [&'static str] {
        &["PROJECT", "ID", "NAME", "EMAIL", "ROLE", "ADDED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.project_id.clone(),
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
            self.added_at.clone(),
        ]
    }
}

/// Output project members in the specified format
pub fn output_project_users(
    project_id: &str,
    users: &[ProjectUser],
    format: OutputFormat,
    no_header: bool,
    shape: Shape,
) {
    let rows: Vec<SerializableProjectUser> = users
        .iter()
        .map(|u| SerializableProjectUser::new(project_id, u))
        .collect();
    output_rows(&rows, format, no_header, shape);
}
