//! Unauthenticated GitHub REST client.
//!
//! Reads the first page of each endpoint and nothing else:
//! - `GET {api_root}/users/{handle}`
//! - `GET {api_root}/users/{handle}/orgs`
//! - `GET {api_root}/users/{handle}/repos`
//! - `GET {api_root}/users/{handle}/followers`
//!
//! The body is always read as text first so the not-found marker can be
//! checked before the status code is looked at.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{StatusCode, Url};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;

use super::remote::{RemoteClient, RemoteError};
use super::types::{MessageBody, RemoteFollower, RemoteOrganization, RemoteRepository, RemoteUser};
use crate::core::config::{DEFAULT_API_ROOT, DEFAULT_USER_AGENT};

/// Value of the `message` field GitHub sends for unknown accounts.
const NOT_FOUND_MARKER: &str = "Not Found";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

pub struct GitHubClient {
    api_root: String,
    user_agent: String,
    client: reqwest::Client,
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_ROOT)
    }
}

impl GitHubClient {
    pub fn new(api_root: impl Into<String>) -> Self {
        let api_root = api_root.into().trim_end_matches('/').to_string();
        Self {
            api_root,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// GitHub rejects requests without a `User-Agent`, so one is always sent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// `/users/{handle}[/{resource}]` under the API root. The handle is one
    /// percent-encoded path segment, so `/`, `?` and `#` stay inside it.
    fn user_url(&self, handle: &str, resource: Option<&str>) -> Result<Url, RemoteError> {
        let mut url = Url::parse(&self.api_root)
            .map_err(|e| RemoteError::Network(format!("invalid API root {}: {}", self.api_root, e)))?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::Network(format!("invalid API root {}", self.api_root)))?
            .pop_if_empty()
            .push("users")
            .push(handle)
            .extend(resource);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RemoteError> {
        info!("GitHub request: GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(|e| {
                warn!("GitHub request failed for {}: {}", url, e);
                RemoteError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("GitHub response status: {} for {}", status, url);

        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        decode_body(status, &body).inspect_err(|e| warn!("GitHub error for {}: {}", url, e))
    }
}

/// True when the body is a JSON object whose `message` is the not-found marker.
fn has_not_found_marker(body: &str) -> bool {
    matches!(
        serde_json::from_str::<MessageBody>(body),
        Ok(MessageBody { message: Some(message) }) if message == NOT_FOUND_MARKER
    )
}

/// Classifies a response: marker first, then status, then shape.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, RemoteError> {
    if has_not_found_marker(body) {
        return Err(RemoteError::NotFound);
    }

    if !status.is_success() {
        return Err(RemoteError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| RemoteError::Parse(e.to_string()))
}

#[async_trait]
impl RemoteClient for GitHubClient {
    async fn fetch_profile(&self, handle: &str) -> Result<RemoteUser, RemoteError> {
        self.get_json(self.user_url(handle, None)?).await
    }

    async fn fetch_organizations(
        &self,
        handle: &str,
    ) -> Result<Vec<RemoteOrganization>, RemoteError> {
        self.get_json(self.user_url(handle, Some("orgs"))?).await
    }

    async fn fetch_repositories(
        &self,
        handle: &str,
    ) -> Result<Vec<RemoteRepository>, RemoteError> {
        self.get_json(self.user_url(handle, Some("repos"))?).await
    }

    async fn fetch_followers(&self, handle: &str) -> Result<Vec<RemoteFollower>, RemoteError> {
        self.get_json(self.user_url(handle, Some("followers"))?).await
    }
}
