//! Repos: public repositories of the current identity.

use log::warn;

use super::{ScreenContext, ScreenState, drop_stale};
use crate::core::action::Effect;
use crate::core::messages;
use crate::core::navigator::RouteId;
use crate::github::{RemoteError, RemoteRepository};
use crate::links;

pub fn loaded(
    cx: &mut ScreenContext<'_>,
    route: RouteId,
    result: Result<Vec<RemoteRepository>, RemoteError>,
) -> Effect {
    let Some(target) = cx.navigator.route_mut(route) else {
        return drop_stale(route, "repositories");
    };
    let ScreenState::Repos(listing) = &mut target.screen else {
        return Effect::None;
    };

    if let Err(e) = listing.resolve(result) {
        warn!("Repositories fetch failed for route {}: {}", route, e);
        cx.reporter.show(messages::REPOS_FETCH_FAILED);
    }
    Effect::None
}

/// Repository rows link to `{web_root}/{full_name}`.
pub fn select(cx: &mut ScreenContext<'_>, index: usize) -> Effect {
    let route = cx.navigator.top();
    let ScreenState::Repos(listing) = &route.screen else {
        return Effect::None;
    };
    listing
        .items
        .get(index)
        .map(|repo| Effect::OpenLink {
            route: route.id(),
            url: links::web_url(cx.web_root, &repo.full_name),
        })
        .unwrap_or(Effect::None)
}
