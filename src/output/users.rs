//! User output formatter

use serde::Serialize;

use super::{output_rows, Shape, TableRow};
use crate::admin::timestamp::format_rfc3339;
use crate::admin::User;
use crate::cli::OutputFormat;

/// Serializable user for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableUser {
    id: String,
    email: String,
    name: String,
    role: String,
    disabled: bool,
    added_at: String,
}

impl From<&User> for SerializableUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone().unwrap_or_default(),
            role: user.role.to_string(),
            disabled: user.disabled,
            added_at: format_rfc3339(&user.added_at),
        }
    }
}

impl TableRow for SerializableUser {
    fn headers() -> &'static [&'static str] {
        &["ID", "EMAIL", "NAME", "ROLE", "DISABLED", "ADDED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.email.clone(),
            self.name.clone(),
            self.role.clone(),
            self.disabled.to_string(),
            self.added_at.clone(),
        ]
    }
}

/// Output users in the specified format
pub fn output_users(users: &[User], format: OutputFormat, no_header: bool, shape: Shape) {
    let rows: Vec<SerializableUser> = users.iter().map(SerializableUser::from).collect();
    output_rows(&rows, format, no_header, shape);
}
