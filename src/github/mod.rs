pub mod client;
pub mod remote;
pub mod types;

pub use client::GitHubClient;
pub use remote::{RemoteClient, RemoteError};
pub use types::{RemoteFollower, RemoteOrganization, RemoteRepository, RemoteUser};
