use async_trait::async_trait;
use thiserror::Error;

use super::types::{RemoteFollower, RemoteOrganization, RemoteRepository, RemoteUser};

/// Errors that can occur while talking to the GitHub API.
///
/// `NotFound` is decided by the body marker, never by the status code.
/// Every other variant belongs to the transport class (see [`RemoteError::is_transport`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The response body carried the "Not Found" marker.
    #[error("resource not found")]
    NotFound,
    /// Non-2xx response without the not-found marker.
    #[error("API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },
    /// Network-level failure (DNS, connection refused, reset while reading).
    #[error("network error: {0}")]
    Network(String),
    /// The body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl RemoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::NotFound)
    }

    /// Network, status and parse failures are all handled the same way by the screens.
    pub fn is_transport(&self) -> bool {
        !self.is_not_found()
    }
}

/// Read-only access to the four public user endpoints.
///
/// Every call issues its own request: nothing is cached, retried or de-duplicated.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn fetch_profile(&self, handle: &str) -> Result<RemoteUser, RemoteError>;

    async fn fetch_organizations(
        &self,
        handle: &str,
    ) -> Result<Vec<RemoteOrganization>, RemoteError>;

    async fn fetch_repositories(&self, handle: &str)
    -> Result<Vec<RemoteRepository>, RemoteError>;

    async fn fetch_followers(&self, handle: &str) -> Result<Vec<RemoteFollower>, RemoteError>;
}
