//! Home: the current profile, its menu, and the search sub-flow.

use log::{debug, info, warn};

use super::{ScreenContext, ScreenState, drop_stale};
use crate::core::action::{Effect, FetchRequest, FetchTarget};
use crate::core::messages;
use crate::core::navigator::{Destination, RouteId};
use crate::core::session;
use crate::github::{RemoteError, RemoteUser};
use crate::links;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// Opens the profile page in the browser.
    Bio,
    /// Pushes a route by name.
    Route(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub description: &'static str,
    pub target: MenuTarget,
}

pub const MENU: [MenuEntry; 4] = [
    MenuEntry {
        label: "Bio",
        description: "Um pouco sobre o usuário",
        target: MenuTarget::Bio,
    },
    MenuEntry {
        label: "Organizações",
        description: "Organizações que o usuário faz parte",
        target: MenuTarget::Route(Destination::ORGS),
    },
    MenuEntry {
        label: "Repositórios",
        description: "Lista contendo todos os repositórios",
        target: MenuTarget::Route(Destination::REPOS),
    },
    MenuEntry {
        label: "Seguidores",
        description: "Lista de seguidores",
        target: MenuTarget::Route(Destination::FOLLOWERS),
    },
];

fn top_home<'a>(cx: &'a mut ScreenContext<'_>) -> Option<&'a mut super::HomeState> {
    match &mut cx.navigator.top_mut().screen {
        ScreenState::Home(home) => Some(home),
        _ => None,
    }
}

pub fn open_search(cx: &mut ScreenContext<'_>) -> Effect {
    if let Some(home) = top_home(cx) {
        home.search_open = true;
    }
    Effect::None
}

pub fn close_search(cx: &mut ScreenContext<'_>) -> Effect {
    if let Some(home) = top_home(cx) {
        home.search_open = false;
    }
    Effect::None
}

pub fn submit_search(cx: &mut ScreenContext<'_>, query: &str) -> Effect {
    let handle = query.trim();
    let route = cx.navigator.top_mut();
    let id = route.id();
    let ScreenState::Home(home) = &mut route.screen else {
        return Effect::None;
    };

    if handle.is_empty() {
        debug!("Ignoring blank search");
        return Effect::None;
    }

    info!("Searching for user '{}'", handle);
    home.searching = true;
    Effect::Fetch(FetchRequest {
        route: id,
        target: FetchTarget::Search,
        handle: handle.to_string(),
    })
}

/// Any failure drops back to the anonymous identity. Only success closes the search.
pub fn search_completed(
    cx: &mut ScreenContext<'_>,
    route: RouteId,
    result: Result<RemoteUser, RemoteError>,
) -> Effect {
    if cx.navigator.top().id() != route {
        // The buried Home must not keep waiting for a result it will never apply
        if let Some(ScreenState::Home(home)) =
            cx.navigator.route_mut(route).map(|buried| &mut buried.screen)
        {
            home.searching = false;
        }
        return drop_stale(route, "search");
    }
    let was_open = matches!(
        &cx.navigator.top().screen,
        ScreenState::Home(home) if home.search_open
    );

    match result {
        Ok(user) => {
            let identity = session::adopt_from(&user);
            info!("Search found {:?}", identity.login_handle());
            cx.navigator.reset_to(Destination::Home(identity));
        }
        Err(e) if e.is_transport() => {
            warn!("Search failed: {}", e);
            cx.navigator.reset_to(Destination::Home(session::reset()));
            cx.reporter.show(messages::SEARCH_FAILED);
        }
        Err(_) => {
            cx.navigator.reset_to(Destination::Home(session::reset()));
            if let Some(home) = top_home(cx) {
                home.search_open = was_open;
            }
            cx.reporter.show(messages::USER_NOT_FOUND);
        }
    }
    Effect::None
}

pub fn reset_profile(cx: &mut ScreenContext<'_>) -> Effect {
    if top_home(cx).is_some() {
        info!("Resetting profile");
        cx.navigator.reset_to(Destination::Home(session::reset()));
    }
    Effect::None
}

pub fn select(cx: &mut ScreenContext<'_>, index: usize) -> Effect {
    let Some(entry) = MENU.get(index) else {
        return Effect::None;
    };
    let route = cx.navigator.top();
    let id = route.id();
    let identity = route.identity().clone();

    match entry.target {
        MenuTarget::Bio => match identity.login_handle() {
            Some(handle) => Effect::OpenLink {
                route: id,
                url: links::web_url(cx.web_root, handle),
            },
            None => {
                cx.reporter.show(messages::GENERIC_FAILURE);
                Effect::None
            }
        },
        MenuTarget::Route(name) => {
            match cx.navigator.navigate_named(name, identity, cx.reporter) {
                Some(pushed) => cx
                    .navigator
                    .route_mut(pushed)
                    .map(super::mount)
                    .unwrap_or(Effect::None),
                None => Effect::None,
            }
        }
    }
}
