//! Client configuration resolved once from explicit values and the environment

use log::debug;
use secrecy::Secret;

use crate::config::{api, credentials};
use crate::error::{AdminError, Result};

/// Connection settings for [`crate::admin::AdminClient`]
#[derive(Debug)]
pub struct ClientConfig {
    /// Admin API key sent as bearer token
    pub admin_token: Secret<String>,
    /// API base URL without trailing slash (e.g. `https://api.openai.com/v1`)
    pub base_url: String,
}

impl ClientConfig {
    /// Build a config from known values
    pub fn new(admin_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            admin_token: Secret::new(admin_token.into()),
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    /// Resolve settings with fallback:
    /// 1. Explicit value (CLI flag or caller-provided)
    /// 2. Environment variable (OPENAI_ADMIN_TOKEN / OPENAI_BASE_URL)
    /// 3. Default base URL (token has no default)
    pub fn resolve(token: Option<&str>, base_url: Option<&str>) -> Result<Self> {
        Self::resolve_with(token, base_url, |name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::resolve`] with an injectable environment lookup
    pub fn resolve_with<F>(token: Option<&str>, base_url: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };

        let admin_token = match non_empty(token.map(str::to_string)) {
            Some(t) => {
                debug!("Using admin token from explicit configuration");
                t
            }
            None => match non_empty(env(credentials::TOKEN_ENV_VAR)) {
                Some(t) => {
                    debug!(
                        "Using admin token from {} environment variable",
                        credentials::TOKEN_ENV_VAR
                    );
                    t
                }
                None => return Err(AdminError::TokenNotFound(token_not_found_message())),
            },
        };

        let base_url = non_empty(base_url.map(str::to_string))
            .or_else(|| non_empty(env(credentials::BASE_URL_ENV_VAR)))
            .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AdminError::Config(format!(
                "Base URL '{}' must start with http:// or https://",
                base_url
            )));
        }

        debug!("Using API base URL: {}", base_url);
        Ok(Self::new(admin_token, base_url))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn token_not_found_message() -> String {
    format!(
        "No admin token found. Please provide one using either:\n\
         \n\
         1. CLI argument:      oaiadmin --admin-token <TOKEN>\n\
         2. Environment var:   export {}=<TOKEN>\n\
         \n\
         Admin keys are created at https://platform.openai.com/settings/organization/admin-keys",
        credentials::TOKEN_ENV_VAR
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_explicit_values_take_precedence() {
        let env = env_from(&[
            ("OPENAI_ADMIN_TOKEN", "env-token"),
            ("OPENAI_BASE_URL", "https://env.example.com/v1"),
        ]);
        let cfg = ClientConfig::resolve_with(
            Some("cli-token"),
            Some("https://cli.example.com/v1/"),
            env,
        )
        .unwrap();
        assert_eq!(cfg.admin_token.expose_secret(), "cli-token");
        assert_eq!(cfg.base_url, "https://cli.example.com/v1");
    }

    #[test]
    fn test_env_fallback() {
        let env = env_from(&[
            ("OPENAI_ADMIN_TOKEN", "env-token"),
            ("OPENAI_BASE_URL", "https://env.example.com/v1"),
        ]);
        let cfg = ClientConfig::resolve_with(None, None, env).unwrap();
        assert_eq!(cfg.admin_token.expose_secret(), "env-token");
        assert_eq!(cfg.base_url, "https://env.example.com/v1");
    }

    #[test]
    fn test_empty_explicit_token_falls_back_to_env() {
        let env = env_from(&[("OPENAI_ADMIN_TOKEN", "env-token")]);
        let cfg = ClientConfig::resolve_with(Some(""), None, env).unwrap();
        assert_eq!(cfg.admin_token.expose_secret(), "env-token");
    }

    #[test]
    fn test_default_base_url() {
        let env = env_from(&[]);
        let cfg = ClientConfig::resolve_with(Some("t"), None, env).unwrap();
        assert_eq!(cfg.base_url, api::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_token() {
        let env = env_from(&[]);
        let err = ClientConfig::resolve_with(None, None, env).unwrap_err();
        match err {
            AdminError::TokenNotFound(msg) => {
                assert!(msg.contains("OPENAI_ADMIN_TOKEN"));
                assert!(msg.contains("--admin-token"));
            }
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_padded_base_url_is_trimmed() {
        let env = env_from(&[
            ("OPENAI_ADMIN_TOKEN", " env-token\n"),
            ("OPENAI_BASE_URL", " https://env.example.com/v1/ "),
        ]);
        let cfg = ClientConfig::resolve_with(None, None, env).unwrap();
        assert_eq!(cfg.admin_token.expose_secret(), "env-token");
        assert_eq!(cfg.base_url, "https://env.example.com/v1");
    }

    #[test]
    fn test_invalid_base_url() {
        let env = env_from(&[]);
        let err = ClientConfig::resolve_with(Some("t"), Some("api.openai.com"), env).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let cfg = ClientConfig::new("super-secret", "https://x.test");
        let dbg = format!("{:?}", cfg);
        assert!(!dbg.contains("super-secret"));
    }
}
