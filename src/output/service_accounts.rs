//! Service account output formatter

use secrecy::ExposeSecret;
use serde::Serialize;

use super::{output_rows, Shape, TableRow};
use crate::admin::timestamp::format_rfc3339;
use crate::admin::{CreatedServiceAccount, ProjectServiceAccount};
use crate::cli::OutputFormat;

/// Serializable service account for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableServiceAccount {
    id: String,
    name: String,
    project_id: String,
    role: String,
    created_at: String,
}

impl From<&ProjectServiceAccount> for SerializableServiceAccount {
    fn from(account: &ProjectServiceAccount) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            project_id: account.project_id.clone(),
            role: account.role.to_string(),
            created_at: format_rfc3339(&account.created_at),
        }
    }
}

impl TableRow for SerializableServiceAccount {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "PROJECT", "ROLE", "CREATED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.project_id.clone(),
            self.role.clone(),
            self.created_at.clone(),
        ]
    }
}

/// Newly created account together with its one-time key
#[derive(Serialize)]
struct SerializableCreatedServiceAccount {
    #[serde(flatten)]
    account: SerializableServiceAccount,
    api_key_id: String,
    api_key: String,
}

impl From<&CreatedServiceAccount> for SerializableCreatedServiceAccount {
    fn from(created: &CreatedServiceAccount) -> Self {
        Self {
            account: SerializableServiceAccount::from(&created.account),
            api_key_id: created.api_key.id.clone(),
            api_key: created.api_key.value.expose_secret().clone(),
        }
    }
}

impl TableRow for SerializableCreatedServiceAccount {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "PROJECT", "ROLE", "CREATED", "API KEY ID", "API KEY"]
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = self.account.cells();
        cells.push(self.api_key_id.clone());
        cells.push(self.api_key.clone());
        cells
    }
}

/// Output service accounts in the specified format
pub fn output_service_accounts(
    accounts: &[ProjectServiceAccount],
    format: OutputFormat,
    no_header: bool,
    shape: Shape,
) {
    let rows: Vec<SerializableServiceAccount> = accounts
        .iter()
        .map(SerializableServiceAccount::from)
        .collect();
    output_rows(&rows, format, no_header, shape);
}

/// Output a freshly created service account, including its API key
pub fn output_created_service_account(
    created: &CreatedServiceAccount,
    format: OutputFormat,
    no_header: bool,
) {
    let rows = [SerializableCreatedServiceAccount::from(created)];
    output_rows(&rows, format, no_header, Shape::Single);
    eprintln!("The API key is shown only once. Store it now; it cannot be retrieved again.");
}
