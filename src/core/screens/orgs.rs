//! Orgs: organizations the current identity belongs to.

use log::warn;

use super::{ScreenContext, ScreenState, drop_stale};
use crate::core::action::Effect;
use crate::core::messages;
use crate::core::navigator::RouteId;
use crate::github::{RemoteError, RemoteOrganization};
use crate::links;

pub fn loaded(
    cx: &mut ScreenContext<'_>,
    route: RouteId,
    result: Result<Vec<RemoteOrganization>, RemoteError>,
) -> Effect {
    let Some(target) = cx.navigator.route_mut(route) else {
        return drop_stale(route, "organizations");
    };
    let ScreenState::Orgs(listing) = &mut target.screen else {
        return Effect::None;
    };

    if let Err(e) = listing.resolve(result) {
        warn!("Organizations fetch failed for route {}: {}", route, e);
        cx.reporter.show(messages::ORGS_FETCH_FAILED);
    }
    Effect::None
}

pub fn select(cx: &mut ScreenContext<'_>, index: usize) -> Effect {
    let route = cx.navigator.top();
    let ScreenState::Orgs(listing) = &route.screen else {
        return Effect::None;
    };
    listing
        .items
        .get(index)
        .map(|org| Effect::OpenLink {
            route: route.id(),
            url: links::web_url(cx.web_root, &org.login_handle),
        })
        .unwrap_or(Effect::None)
}
