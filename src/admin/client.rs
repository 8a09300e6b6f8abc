//! HTTP client for the OpenAI organization admin API

use log::debug;
use reqwest::{Client, StatusCode};
use secrecy::Secret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::admin::settings::ClientConfig;
use crate::admin::traits::{AdminResource, ListPage};
use crate::config::api;
use crate::error::{AdminError, Result};

/// Error envelope returned by the API on non-success responses
#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: Option<String>,
}

/// OpenAI admin API client
///
/// Cheap to clone: clones share the connection pool.
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    token: Arc<Secret<String>>,
    base_url: String,
    /// Every request races this token; cancelling it aborts in-flight calls
    cancel: CancellationToken,
}

impl AdminClient {
    /// Create a new client from resolved settings
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent(concat!("oaiadmin/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: Arc::new(config.admin_token),
            base_url: config.base_url,
            cancel: CancellationToken::new(),
        }
    }

    /// Clone of this client whose calls are aborted when `token` is cancelled
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: token,
            ..self.clone()
        }
    }

    /// Cancellation token observed by this client
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Base URL for API requests (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        use secrecy::ExposeSecret;
        builder
            .bearer_auth(self.token.expose_secret())
            .header("Content-Type", "application/json")
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(self.url(path)))
    }

    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(self.url(path)))
    }

    /// Send a request and read the whole body, aborting on cancellation
    async fn execute(
        &self,
        builder: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<(StatusCode, String)> {
        if self.cancel.is_cancelled() {
            return Err(AdminError::Cancelled(format!(
                "request for {} was not sent",
                context
            )));
        }

        let call = async {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, AdminError>((status, body))
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(AdminError::Cancelled(format!(
                "request for {} aborted",
                context
            ))),
            result = call => result,
        }
    }

    /// Send a request and decode the JSON response into `T`
    async fn execute_json<T>(&self, builder: reqwest::RequestBuilder, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.execute(builder, context).await?;
        decode_response(status, &body, context)
    }

    /// GET a single resource
    ///
    /// `resource_label` names the resource in errors, e.g. `invite 'invite-abc'`.
    pub(crate) async fn get_resource<T>(&self, path: &str, resource_label: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", resource_label, self.url(path));
        self.execute_json(self.get(path), resource_label).await
    }

    /// POST a JSON body and decode the response
    pub(crate) async fn post_resource<B, T>(&self, path: &str, body: &B, context: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {} ({})", self.url(path), context);
        self.execute_json(self.post(path).json(body), context).await
    }

    /// POST without a body (action endpoints such as archive)
    pub(crate) async fn post_action<T>(&self, path: &str, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("POST {} ({})", self.url(path), context);
        self.execute_json(self.post(path), context).await
    }

    /// DELETE a resource; the deletion receipt body is not interpreted
    pub(crate) async fn delete_resource(&self, path: &str, resource_label: &str) -> Result<()> {
        debug!("Deleting {} at: {}", resource_label, self.url(path));
        let (status, body) = self.execute(self.delete(path), resource_label).await?;
        check_status(status, &body, resource_label)?;
        debug!("Deleted {}", resource_label);
        Ok(())
    }

    /// Fetch every page of a cursor-paginated list endpoint
    ///
    /// Pages are requested strictly in sequence: each request carries
    /// `limit` and, after the first, `after=<cursor of previous page>`.
    /// Any failure aborts the whole fetch; no partial result is returned.
    ///
    /// # Arguments
    /// * `path` - API path (e.g. "/organization/invites")
    /// * `error_context` - Context for error messages (e.g. "invites")
    pub async fn fetch_all_pages<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + AdminResource,
    {
        let mut all_items: Vec<T> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_num: u32 = 1;

        loop {
            let page_path = page_path(path, cursor.as_deref());
            debug!("Fetching page {} from: {}", page_num, self.url(&page_path));

            let page_context = format!("{} (page {})", error_context, page_num);
            let page: ListPage<T> = self.execute_json(self.get(&page_path), &page_context).await?;

            let next = page.next_cursor();
            let has_more = page.has_more;
            debug!(
                "Page {} returned {} items (has_more: {})",
                page_num,
                page.data.len(),
                has_more
            );
            all_items.extend(page.data);

            if !has_more {
                break;
            }

            match next {
                Some(next) if cursor.as_deref() != Some(next.as_str()) => cursor = Some(next),
                Some(next) => {
                    return Err(AdminError::Decode(format!(
                        "{} repeated cursor '{}'",
                        page_context, next
                    )))
                }
                None => {
                    return Err(AdminError::Decode(format!(
                        "{} reported more data but no cursor",
                        page_context
                    )))
                }
            }
            page_num += 1;
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }
}

/// Build an organization-admin path from raw segments, percent-encoding each
///
/// `org_path(&["projects", "proj_1", "users"])` => `/organization/projects/proj_1/users`
pub(crate) fn org_path(segments: &[&str]) -> String {
    let mut path = api::ORGANIZATION.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

/// Append pagination query parameters to a path
fn page_path(path: &str, after: Option<&str>) -> String {
    let separator = if path.contains('?') { "&" } else { "?" };
    let mut page_path = format!("{}{}limit={}", path, separator, api::DEFAULT_PAGE_SIZE);
    if let Some(after) = after {
        page_path.push_str("&after=");
        page_path.push_str(&urlencoding::encode(after));
    }
    page_path
}

/// Map a non-success status to a typed error
fn check_status(status: StatusCode, body: &str, context: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::NOT_FOUND {
        return Err(AdminError::NotFound {
            resource: context.to_string(),
        });
    }

    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    let message = if detail.is_empty() {
        format!("Request for {} failed", context)
    } else {
        format!("Request for {} failed: {}", context, detail)
    };

    Err(AdminError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Check status, then decode the body
fn decode_response<T>(status: StatusCode, body: &str, context: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    check_status(status, body, context)?;
    serde_json::from_str(body)
        .map_err(|e| AdminError::Decode(format!("Failed to parse {}: {}", context, e)))
}

#[cfg(test)]
impl AdminClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(ClientConfig::new("test-token", base_url))
    }
}
