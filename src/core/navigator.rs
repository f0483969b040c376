//! # Navigator
//!
//! A stack of routes. Each route is one screen instance: a typed
//! [`Destination`] carrying that screen's own identity snapshot, plus the
//! screen's local state.
//!
//! ```text
//! push(Orgs(I))        [Home(A)] → [Home(A), Orgs(I)]
//! back()               [Home(A), Orgs(I)] → [Home(A)]      // Home still shows A
//! reset_to(Home(B))    [Home(A), Followers(A)] → [Home(B)]
//! ```
//!
//! The root route is held apart from the pushed ones, so the stack can never
//! be empty.

use std::fmt;

use log::{debug, info, warn};
use thiserror::Error;

use crate::core::messages;
use crate::core::reporter::ErrorReporter;
use crate::core::screens::ScreenState;
use crate::core::session::ProfileIdentity;

/// Identifies one screen instance for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(u64);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Home(ProfileIdentity),
    Orgs(ProfileIdentity),
    Repos(ProfileIdentity),
    Followers(ProfileIdentity),
}

impl Destination {
    pub const HOME: &'static str = "Home";
    pub const ORGS: &'static str = "Orgs";
    pub const REPOS: &'static str = "Repos";
    pub const FOLLOWERS: &'static str = "Followers";

    /// Resolves a route name. Names are case-sensitive.
    pub fn from_name(name: &str, identity: ProfileIdentity) -> Result<Self, NavigationError> {
        match name {
            Self::HOME => Ok(Destination::Home(identity)),
            Self::ORGS => Ok(Destination::Orgs(identity)),
            Self::REPOS => Ok(Destination::Repos(identity)),
            Self::FOLLOWERS => Ok(Destination::Followers(identity)),
            other => Err(NavigationError::UnknownDestination(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Destination::Home(_) => Self::HOME,
            Destination::Orgs(_) => Self::ORGS,
            Destination::Repos(_) => Self::REPOS,
            Destination::Followers(_) => Self::FOLLOWERS,
        }
    }

    pub fn identity(&self) -> &ProfileIdentity {
        match self {
            Destination::Home(identity)
            | Destination::Orgs(identity)
            | Destination::Repos(identity)
            | Destination::Followers(identity) => identity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("unknown destination '{0}'")]
    UnknownDestination(String),
}

#[derive(Debug)]
pub struct Route {
    id: RouteId,
    destination: Destination,
    pub screen: ScreenState,
}

impl Route {
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn identity(&self) -> &ProfileIdentity {
        self.destination.identity()
    }
}

#[derive(Debug)]
pub struct Navigator {
    root: Route,
    stack: Vec<Route>,
    next_id: u64,
}

impl Navigator {
    pub fn new(root: Destination) -> Self {
        let screen = ScreenState::for_destination(&root);
        Self {
            root: Route {
                id: RouteId(0),
                destination: root,
                screen,
            },
            stack: Vec::new(),
            next_id: 1,
        }
    }

    fn make_route(&mut self, destination: Destination) -> Route {
        let id = RouteId(self.next_id);
        self.next_id += 1;
        Route {
            id,
            screen: ScreenState::for_destination(&destination),
            destination,
        }
    }

    /// Appends a route on top of the current history.
    pub fn push(&mut self, destination: Destination) -> RouteId {
        let route = self.make_route(destination);
        let id = route.id;
        info!("Navigator push {} {}", route.destination.name(), id);
        self.stack.push(route);
        id
    }

    /// Pops the top route. Returns `false` when only the root is left.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(route) => {
                info!(
                    "Navigator back from {} {}",
                    route.destination.name(),
                    route.id
                );
                true
            }
            None => {
                debug!("Navigator back ignored at root");
                false
            }
        }
    }

    /// Replaces the entire history with a single root route.
    pub fn reset_to(&mut self, destination: Destination) -> RouteId {
        let route = self.make_route(destination);
        let id = route.id;
        info!(
            "Navigator reset to {} {} (discarding {} routes)",
            route.destination.name(),
            id,
            self.depth()
        );
        self.stack.clear();
        self.root = route;
        id
    }

    /// Pushes a destination by route name.
    ///
    /// An unknown name leaves the history untouched and reports the generic
    /// redirect failure.
    pub fn navigate_named(
        &mut self,
        name: &str,
        identity: ProfileIdentity,
        reporter: &mut ErrorReporter,
    ) -> Option<RouteId> {
        match Destination::from_name(name, identity) {
            Ok(destination) => Some(self.push(destination)),
            Err(e) => {
                warn!("Navigation failed: {}", e);
                reporter.show(messages::REDIRECT_FAILED);
                None
            }
        }
    }

    pub fn top(&self) -> &Route {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn top_mut(&mut self) -> &mut Route {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn contains(&self, id: RouteId) -> bool {
        self.route(id).is_some()
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes().find(|route| route.id == id)
    }

    pub fn route_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        std::iter::once(&mut self.root)
            .chain(self.stack.iter_mut())
            .find(|route| route.id == id)
    }

    /// Routes from root to top.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        std::iter::once(&self.root).chain(self.stack.iter())
    }

    /// Destinations from root to top.
    pub fn destinations(&self) -> impl Iterator<Item = &Destination> {
        self.routes().map(Route::destination)
    }
}
