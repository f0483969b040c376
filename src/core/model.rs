//! List rows shown by the Orgs, Repos and Followers screens.

use crate::github::{RemoteFollower, RemoteOrganization, RemoteRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub login_handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follower {
    pub login_handle: String,
}

impl From<RemoteOrganization> for Organization {
    fn from(org: RemoteOrganization) -> Self {
        Self {
            login_handle: org.login,
        }
    }
}

impl From<RemoteRepository> for Repository {
    fn from(repo: RemoteRepository) -> Self {
        Self {
            name: repo.name,
            full_name: repo.full_name,
        }
    }
}

impl From<RemoteFollower> for Follower {
    fn from(follower: RemoteFollower) -> Self {
        Self {
            login_handle: follower.login,
        }
    }
}
