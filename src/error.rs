use std::fmt;

/// Custom error type for OpenAI admin operations
#[derive(Debug)]
pub enum AdminError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// API returned 404 for the named resource
    NotFound { resource: String },
    /// API returned any other error response (validation, auth, server)
    Api { status: u16, message: String },
    /// Response payload could not be decoded
    Decode(String),
    /// API key owner tag disagrees with the populated owner payload
    OwnerMismatch(String),
    /// Operation aborted by an external cancellation signal
    Cancelled(String),
    /// Admin token not found in any source
    TokenNotFound(String),
    /// Configuration error
    Config(String),
}

impl AdminError {
    /// True when the server reported the resource as missing (HTTP 404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::NotFound { .. })
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::NotFound { .. } => Some(404),
            AdminError::Api { status, .. } => Some(*status),
            AdminError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AdminError::NotFound { resource } => write!(f, "{} not found", resource),
            AdminError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AdminError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AdminError::OwnerMismatch(msg) => write!(f, "Inconsistent API key owner: {}", msg),
            AdminError::Cancelled(msg) => write!(f, "Cancelled: {}", msg),
            AdminError::TokenNotFound(msg) => write!(f, "{}", msg),
            AdminError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        AdminError::Http(err)
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Decode(err.to_string())
    }
}

/// Result type alias for admin operations
pub type Result<T> = std::result::Result<T, AdminError>;
