//! Followers: the accounts following the current identity.
//!
//! Picking a follower fetches that account and, on success, pivots: the
//! whole history is replaced by a Home route showing the follower.

use log::{info, warn};

use super::{ScreenContext, ScreenState, drop_stale};
use crate::core::action::{Effect, FetchRequest, FetchTarget};
use crate::core::messages;
use crate::core::navigator::{Destination, RouteId};
use crate::core::session;
use crate::github::{RemoteError, RemoteFollower, RemoteUser};

pub fn loaded(
    cx: &mut ScreenContext<'_>,
    route: RouteId,
    result: Result<Vec<RemoteFollower>, RemoteError>,
) -> Effect {
    let Some(target) = cx.navigator.route_mut(route) else {
        return drop_stale(route, "followers");
    };
    let ScreenState::Followers(listing) = &mut target.screen else {
        return Effect::None;
    };

    if let Err(e) = listing.resolve(result) {
        warn!("Followers fetch failed for route {}: {}", route, e);
        cx.reporter.show(messages::FOLLOWERS_FAILED);
    }
    Effect::None
}

pub fn select(cx: &mut ScreenContext<'_>, index: usize) -> Effect {
    let route = cx.navigator.top();
    let ScreenState::Followers(listing) = &route.screen else {
        return Effect::None;
    };
    let Some(follower) = listing.items.get(index) else {
        return Effect::None;
    };

    info!("Pivoting to follower '{}'", follower.login_handle);
    Effect::Fetch(FetchRequest {
        route: route.id(),
        target: FetchTarget::Pivot,
        handle: follower.login_handle.clone(),
    })
}

pub fn pivot_completed(
    cx: &mut ScreenContext<'_>,
    route: RouteId,
    result: Result<RemoteUser, RemoteError>,
) -> Effect {
    if cx.navigator.top().id() != route {
        return drop_stale(route, "pivot");
    }

    match result {
        Ok(user) => {
            let identity = session::adopt_from(&user);
            info!("Pivot to {:?}", identity.login_handle());
            cx.navigator.reset_to(Destination::Home(identity));
        }
        Err(e) => {
            warn!("Pivot failed: {}", e);
            cx.reporter.show(messages::FOLLOWERS_FAILED);
        }
    }
    Effect::None
}
