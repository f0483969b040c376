//! Wire types for the GitHub REST responses we read.
//!
//! Only the fields the screens use are declared; serde ignores the rest.

use serde::Deserialize;

/// Body of `GET /users/{handle}`.
///
/// Every field is optional: accounts without a display name return `null`,
/// and the avatar can be missing on odd responses.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteUser {
    pub name: Option<String>,
    pub login: Option<String>,
    pub avatar_url: Option<String>,
}

/// Item of `GET /users/{handle}/orgs`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteOrganization {
    pub login: String,
}

/// Item of `GET /users/{handle}/repos`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    pub name: String,
    pub full_name: String,
}

/// Item of `GET /users/{handle}/followers`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteFollower {
    pub login: String,
}

/// Error-shaped body (`{"message": "...", "documentation_url": "..."}`).
#[derive(Deserialize, Debug)]
pub(crate) struct MessageBody {
    pub message: Option<String>,
}
