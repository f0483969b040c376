//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::config::DEFAULT_WEB_ROOT;
use crate::core::navigator::{Destination, Navigator, RouteId};
use crate::core::reporter::ErrorReporter;
use crate::core::screens::ScreenContext;
use crate::core::session::{self, ProfileIdentity};
use crate::core::state::App;
use crate::github::{
    RemoteClient, RemoteError, RemoteFollower, RemoteOrganization, RemoteRepository, RemoteUser,
};
use crate::links::{LinkOpenError, LinkOpener};

/// Creates a fresh App pointing at the public web root.
pub fn test_app() -> App {
    App::new(DEFAULT_WEB_ROOT)
}

pub fn remote_user(name: Option<&str>, login: &str, avatar: Option<&str>) -> RemoteUser {
    RemoteUser {
        name: name.map(str::to_string),
        login: Some(login.to_string()),
        avatar_url: avatar.map(str::to_string),
    }
}

/// A navigator and reporter, for driving screen controllers directly.
pub struct TestScreens {
    pub navigator: Navigator,
    pub reporter: ErrorReporter,
}

impl TestScreens {
    /// An anonymous Home root.
    pub fn new() -> Self {
        Self::rooted(session::initialize(None))
    }

    /// A Home root showing `login`.
    pub fn with_identity(login: &str) -> Self {
        Self::rooted(session::adopt_from(&remote_user(None, login, None)))
    }

    fn rooted(identity: ProfileIdentity) -> Self {
        Self {
            navigator: Navigator::new(Destination::Home(identity)),
            reporter: ErrorReporter::new(),
        }
    }

    /// The identity shown by the top route.
    pub fn identity(&self) -> ProfileIdentity {
        self.navigator.top().identity().clone()
    }

    pub fn push(&mut self, destination: Destination) -> RouteId {
        self.navigator.push(destination)
    }

    pub fn with<R>(&mut self, f: impl FnOnce(&mut ScreenContext<'_>) -> R) -> R {
        let mut cx = ScreenContext {
            navigator: &mut self.navigator,
            reporter: &mut self.reporter,
            web_root: DEFAULT_WEB_ROOT,
        };
        f(&mut cx)
    }
}

/// Scripted in-memory GitHub. Unknown handles answer `NotFound`.
#[derive(Default)]
pub struct StubClient {
    users: HashMap<String, RemoteUser>,
    orgs: HashMap<String, Vec<RemoteOrganization>>,
    followers: HashMap<String, Vec<RemoteFollower>>,
    broken: Option<RemoteError>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, login: &str, name: Option<&str>) -> Self {
        self.users
            .insert(login.to_string(), remote_user(name, login, None));
        self
    }

    pub fn with_orgs(mut self, login: &str, orgs: &[&str]) -> Self {
        let rows = orgs
            .iter()
            .map(|org| RemoteOrganization {
                login: org.to_string(),
            })
            .collect();
        self.orgs.insert(login.to_string(), rows);
        self
    }

    pub fn with_followers(mut self, login: &str, followers: &[&str]) -> Self {
        let rows = followers
            .iter()
            .map(|follower| RemoteFollower {
                login: follower.to_string(),
            })
            .collect();
        self.followers.insert(login.to_string(), rows);
        self
    }

    /// Every call fails with `error`.
    pub fn broken(error: RemoteError) -> Self {
        Self {
            broken: Some(error),
            ..Self::default()
        }
    }

    fn list<T: Clone>(
        &self,
        rows: &HashMap<String, Vec<T>>,
        handle: &str,
    ) -> Result<Vec<T>, RemoteError> {
        if let Some(error) = &self.broken {
            return Err(error.clone());
        }
        if !self.users.contains_key(handle) {
            return Err(RemoteError::NotFound);
        }
        Ok(rows.get(handle).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl RemoteClient for StubClient {
    async fn fetch_profile(&self, handle: &str) -> Result<RemoteUser, RemoteError> {
        if let Some(error) = &self.broken {
            return Err(error.clone());
        }
        self.users.get(handle).cloned().ok_or(RemoteError::NotFound)
    }

    async fn fetch_organizations(
        &self,
        handle: &str,
    ) -> Result<Vec<RemoteOrganization>, RemoteError> {
        self.list(&self.orgs, handle)
    }

    async fn fetch_repositories(
        &self,
        handle: &str,
    ) -> Result<Vec<RemoteRepository>, RemoteError> {
        self.list(&HashMap::new(), handle)
    }

    async fn fetch_followers(&self, handle: &str) -> Result<Vec<RemoteFollower>, RemoteError> {
        self.list(&self.followers, handle)
    }
}

/// Remembers every URL it was asked to open.
#[derive(Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|urls| urls.clone()).unwrap_or_default()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkOpenError> {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_string());
        }
        Ok(())
    }
}

/// A platform with no browser.
pub struct FailingLinkOpener;

impl LinkOpener for FailingLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkOpenError> {
        Err(LinkOpenError::Unsupported {
            url: url.to_string(),
            reason: "no browser available".to_string(),
        })
    }
}
