//! Common traits for admin API resources

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Common trait for all admin API entities
///
/// The id is what list endpoints use as the pagination cursor.
pub trait AdminResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable label (name or email)
    fn label(&self) -> &str;

    /// Check if the resource matches by id or label
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.label() == input
    }
}

/// One page of a cursor-paginated list endpoint
///
/// `{"object": "list", "data": [...], "first_id": "...", "last_id": "...", "has_more": true}`
#[derive(Deserialize, Debug)]
pub struct ListPage<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub first_id: Option<String>,
    #[serde(default)]
    pub last_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T: AdminResource> ListPage<T> {
    /// Cursor for the page after this one
    ///
    /// Prefers the server's `last_id`, falling back to the id of the last item.
    pub fn next_cursor(&self) -> Option<String> {
        self.last_id
            .clone()
            .filter(|id| !id.is_empty())
            .or_else(|| self.data.last().map(|item| item.id().to_string()))
    }
}

/// Parse a user-supplied value into a wire enum, honouring its serde aliases
///
/// Used by the `FromStr` impls of the role and status enums.
pub(crate) fn parse_wire_enum<T: DeserializeOwned>(
    value: &str,
    what: &str,
) -> std::result::Result<T, String> {
    let normalized = value.trim().to_lowercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|_| format!("invalid {} '{}'", what, value))
}
