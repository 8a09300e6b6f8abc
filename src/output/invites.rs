//! Invite output formatter

use serde::Serialize;

use super::{output_rows, Shape, TableRow};
use crate::admin::timestamp::format_rfc3339;
use crate::admin::Invite;
use crate::cli::OutputFormat;

/// Serializable invite for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableInvite {
    id: String,
    email: String,
    role: String,
    status: String,
    invited_at: String,
    expires_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    accepted_at: Option<String>,
}

impl From<&Invite> for SerializableInvite {
    fn from(invite: &Invite) -> Self {
        Self {
            id: invite.id.clone(),
            email: invite.email.clone(),
            role: invite.role.to_string(),
            status: invite.status.to_string(),
            invited_at: format_rfc3339(&invite.invited_at),
            expires_at: format_rfc3339(&invite.expires_at),
            accepted_at: invite.accepted_at.as_ref().map(format_rfc3339),
        }
    }
}

impl TableRow for SerializableInvite {
    fn headers() -> &'static [&'static str] {
        &["ID", "EMAIL", "ROLE", "STATUS", "INVITED", "EXPIRES", "ACCEPTED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.email.clone(),
            self.role.clone(),
            self.status.clone(),
            self.invited_at.clone(),
            self.expires_at.clone(),
            self.accepted_at.clone().unwrap_or_default(),
        ]
    }
}

/// Output invites in the specified format
pub fn output_invites(invites: &[Invite], format: OutputFormat, no_header: bool, shape: Shape) {
    let rows: Vec<SerializableInvite> = invites.iter().map(SerializableInvite::from).collect();
    output_rows(&rows, format, no_header, shape);
}
