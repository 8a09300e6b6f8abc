/// Configuration constants for the OpenAI admin API
pub mod api {
    /// Default API base URL (overridable via config or environment)
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

    /// Root path of all organization admin endpoints
    pub const ORGANIZATION: &str = "/organization";

    /// Invites endpoint
    pub const INVITES: &str = "invites";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Project API keys endpoint (nested under a project)
    pub const API_KEYS: &str = "api-keys";

    /// Project service accounts endpoint (nested under a project)
    pub const SERVICE_ACCOUNTS: &str = "service_accounts";

    /// Users endpoint (organization level, or nested under a project)
    pub const USERS: &str = "users";

    /// Page size used for every list request
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the admin API key
    pub const TOKEN_ENV_VAR: &str = "OPENAI_ADMIN_TOKEN";

    /// Environment variable overriding the API base URL
    pub const BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
