//! # Screen Controllers
//!
//! One module per destination. Controllers read the route they act on from
//! the [`Navigator`], change only that route's local state, and ask for
//! anything else (a fetch, a link, a different history) through the
//! [`Effect`] they return or an explicit navigator call.
//!
//! Errors are never shown directly: the [`ErrorReporter`] is passed in
//! through [`ScreenContext`] and gets exactly one message per failure.
//!
//! ## Late completions
//!
//! Fetches are never cancelled. A completion carries the [`RouteId`] that
//! issued it and is dropped when that route is gone:
//!
//! - list loads apply while the route is anywhere on the stack
//! - search and pivot results apply only while the route is on top, since
//!   they rewrite the whole history

pub mod followers;
pub mod home;
pub mod orgs;
pub mod repos;

use log::{debug, warn};

use crate::core::action::{Effect, FetchRequest, FetchTarget};
use crate::core::messages;
use crate::core::model::{Follower, Organization, Repository};
use crate::core::navigator::{Destination, Navigator, Route, RouteId};
use crate::core::reporter::ErrorReporter;
use crate::github::RemoteError;
use crate::links::LinkOpenError;

/// Everything a controller may touch while handling one action.
pub struct ScreenContext<'a> {
    pub navigator: &'a mut Navigator,
    pub reporter: &'a mut ErrorReporter,
    /// Root for deep links, e.g. `https://github.com`.
    pub web_root: &'a str,
}

#[derive(Debug)]
pub enum ScreenState {
    Home(HomeState),
    Orgs(Listing<Organization>),
    Repos(Listing<Repository>),
    Followers(Listing<Follower>),
}

impl ScreenState {
    pub fn for_destination(destination: &Destination) -> Self {
        match destination {
            Destination::Home(_) => ScreenState::Home(HomeState::default()),
            Destination::Orgs(_) => ScreenState::Orgs(Listing::default()),
            Destination::Repos(_) => ScreenState::Repos(Listing::default()),
            Destination::Followers(_) => ScreenState::Followers(Listing::default()),
        }
    }

    /// Number of selectable rows on this screen.
    pub fn row_count(&self) -> usize {
        match self {
            ScreenState::Home(_) => home::MENU.len(),
            ScreenState::Orgs(listing) => listing.items.len(),
            ScreenState::Repos(listing) => listing.items.len(),
            ScreenState::Followers(listing) => listing.items.len(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            ScreenState::Home(home) => home.searching,
            ScreenState::Orgs(listing) => listing.loading,
            ScreenState::Repos(listing) => listing.loading,
            ScreenState::Followers(listing) => listing.loading,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub search_open: bool,
    pub searching: bool,
}

/// A fetched list. Stays empty until a fetch succeeds; a failure never
/// leaves partial rows behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub loading: bool,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
        }
    }
}

impl<T> Listing<T> {
    fn begin_fetch(
        &mut self,
        route: RouteId,
        handle: Option<String>,
        target: FetchTarget,
    ) -> Effect {
        match handle {
            Some(handle) => {
                self.loading = true;
                Effect::Fetch(FetchRequest {
                    route,
                    target,
                    handle,
                })
            }
            None => {
                debug!("Route {} has no handle, skipping {:?} fetch", route, target);
                Effect::None
            }
        }
    }

    /// Stores a completed fetch. On error the list is cleared and the error returned.
    pub fn resolve<R>(&mut self, result: Result<Vec<R>, RemoteError>) -> Result<(), RemoteError>
    where
        T: From<R>,
    {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.items = rows.into_iter().map(T::from).collect();
                Ok(())
            }
            Err(e) => {
                self.items.clear();
                Err(e)
            }
        }
    }
}

/// Starts whatever a freshly pushed route needs. Only list screens fetch.
pub fn mount(route: &mut Route) -> Effect {
    let id = route.id();
    let handle = route.identity().login_handle().map(str::to_owned);
    match &mut route.screen {
        ScreenState::Home(_) => Effect::None,
        ScreenState::Orgs(listing) => listing.begin_fetch(id, handle, FetchTarget::Organizations),
        ScreenState::Repos(listing) => listing.begin_fetch(id, handle, FetchTarget::Repositories),
        ScreenState::Followers(listing) => listing.begin_fetch(id, handle, FetchTarget::Followers),
    }
}

/// Activates the row at `index` on the top route.
pub fn select(cx: &mut ScreenContext<'_>, index: usize) -> Effect {
    match cx.navigator.top().destination() {
        Destination::Home(_) => home::select(cx, index),
        Destination::Orgs(_) => orgs::select(cx, index),
        Destination::Repos(_) => repos::select(cx, index),
        Destination::Followers(_) => followers::select(cx, index),
    }
}

/// The platform could not open a deep link issued by `route`.
pub fn link_failed(cx: &mut ScreenContext<'_>, route: RouteId, error: &LinkOpenError) -> Effect {
    warn!("Link open failed for route {}: {}", route, error);
    let message = match cx.navigator.route(route).map(Route::destination) {
        Some(Destination::Orgs(_)) => messages::ORG_LINK_FAILED,
        Some(Destination::Repos(_)) => messages::REPO_LINK_FAILED,
        _ => messages::GENERIC_FAILURE,
    };
    cx.reporter.show(message);
    Effect::None
}

pub(crate) fn drop_stale(route: RouteId, what: &str) -> Effect {
    debug!("Dropping stale {} result for route {}", what, route);
    Effect::None
}
