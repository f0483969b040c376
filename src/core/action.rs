//! # Actions
//!
//! Everything that can happen in Octoscope becomes an `Action`.
//! User presses Enter on a follower? That's `Action::Select(index)`.
//! The follower's profile arrives? That's `Action::PivotCompleted { .. }`.
//!
//! The `update()` function takes the current state and an action, applies the
//! transition, and returns the `Effect` the shell must carry out. No I/O here.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```
//!
//! Completion actions carry the `RouteId` of the screen that asked for them,
//! so a result can be matched to (or dropped for) the screen instance.

use log::debug;

use crate::core::navigator::RouteId;
use crate::core::screens::{self, followers, home, orgs, repos};
use crate::core::state::App;
use crate::github::{
    RemoteError, RemoteFollower, RemoteOrganization, RemoteRepository, RemoteUser,
};
use crate::links::LinkOpenError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// Pop the top route.
    Back,
    DismissError,
    OpenSearch,
    CloseSearch,
    SubmitSearch(String),
    ResetProfile,
    /// Activate a row on the top screen (menu entry, org, repo or follower).
    Select(usize),
    SearchCompleted {
        route: RouteId,
        result: Result<RemoteUser, RemoteError>,
    },
    OrganizationsLoaded {
        route: RouteId,
        result: Result<Vec<RemoteOrganization>, RemoteError>,
    },
    RepositoriesLoaded {
        route: RouteId,
        result: Result<Vec<RemoteRepository>, RemoteError>,
    },
    FollowersLoaded {
        route: RouteId,
        result: Result<Vec<RemoteFollower>, RemoteError>,
    },
    PivotCompleted {
        route: RouteId,
        result: Result<RemoteUser, RemoteError>,
    },
    LinkOpenFailed {
        route: RouteId,
        error: LinkOpenError,
    },
}

/// Side effects requested by `update()`, executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Fetch(FetchRequest),
    OpenLink { route: RouteId, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub route: RouteId,
    pub target: FetchTarget,
    pub handle: String,
}

/// What a fetch is for. Search and Pivot both read a profile but complete differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Search,
    Organizations,
    Repositories,
    Followers,
    Pivot,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    let mut cx = app.context();
    match action {
        Action::Quit => Effect::Quit,
        Action::Back => {
            cx.navigator.back();
            Effect::None
        }
        Action::DismissError => {
            cx.reporter.dismiss();
            Effect::None
        }
        Action::OpenSearch => home::open_search(&mut cx),
        Action::CloseSearch => home::close_search(&mut cx),
        Action::SubmitSearch(query) => home::submit_search(&mut cx, &query),
        Action::ResetProfile => home::reset_profile(&mut cx),
        Action::Select(index) => screens::select(&mut cx, index),
        Action::SearchCompleted { route, result } => home::search_completed(&mut cx, route, result),
        Action::OrganizationsLoaded { route, result } => orgs::loaded(&mut cx, route, result),
        Action::RepositoriesLoaded { route, result } => repos::loaded(&mut cx, route, result),
        Action::FollowersLoaded { route, result } => followers::loaded(&mut cx, route, result),
        Action::PivotCompleted { route, result } => {
            followers::pivot_completed(&mut cx, route, result)
        }
        Action::LinkOpenFailed { route, error } => screens::link_failed(&mut cx, route, &error),
    }
}
