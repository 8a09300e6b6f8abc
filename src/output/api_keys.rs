//! Project API key output formatter

use serde::Serialize;

use super::{output_rows, Shape, TableRow};
use crate::admin::timestamp::format_rfc3339;
use crate::admin::ProjectApiKey;
use crate::cli::OutputFormat;

/// Serializable owner, flattened to the fields shared by both owner kinds
#[derive(Serialize)]
struct SerializableOwner {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    role: String,
}

/// Serializable API key for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableApiKey {
    id: String,
    name: String,
    redacted_value: String,
    created_at: String,
    owner: SerializableOwner,
}

impl From<&ProjectApiKey> for SerializableApiKey {
    fn from(key: &ProjectApiKey) -> Self {
        Self {
            id: key.id.clone(),
            name: key.name.clone().unwrap_or_default(),
            redacted_value: key.redacted_value.clone(),
            created_at: format_rfc3339(&key.created_at),
            owner: SerializableOwner {
                kind: key.owner.kind().to_string(),
                id: key.owner.id().to_string(),
                name: key.owner.display_name().to_string(),
                email: key.owner.user().map(|u| u.email.clone()),
                role: key.owner.role(),
            },
        }
    }
}

impl TableRow for SerializableApiKey {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "VALUE", "OWNER TYPE", "OWNER", "ROLE", "CREATED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.redacted_value.clone(),
            self.owner.kind.clone(),
            self.owner.email.clone().unwrap_or_else(|| self.owner.name.clone()),
            self.owner.role.clone(),
            self.created_at.clone(),
        ]
    }
}

/// Output API keys in the specified format
pub fn output_api_keys(keys: &[ProjectApiKey], format: OutputFormat, no_header: bool, shape: Shape) {
    let rows: Vec<SerializableApiKey> = keys.iter().map(SerializableApiKey::from).collect();
    output_rows(&rows, format, no_header, shape);
}
