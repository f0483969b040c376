//! # Effect Runner
//!
//! Turns the `Effect`s returned by `update()` into I/O and the I/O results
//! back into `Action`s. Shells (the TUI, the integration tests) feed those
//! actions into `update()` again.
//!
//! ```text
//! Effect::Fetch(req)      ──► RemoteClient ──► Action::*Loaded / *Completed
//! Effect::OpenLink{..}    ──► LinkOpener   ──► Action::LinkOpenFailed (on error)
//! ```

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, FetchRequest, FetchTarget, update};
use crate::core::navigator::RouteId;
use crate::core::state::App;
use crate::github::RemoteClient;
use crate::links::LinkOpener;

/// Runs one fetch and tags the result with the route that asked for it.
pub async fn perform_fetch(client: &dyn RemoteClient, request: FetchRequest) -> Action {
    let FetchRequest {
        route,
        target,
        handle,
    } = request;
    debug!("Fetching {:?} for '{}' (route {})", target, handle, route);

    match target {
        FetchTarget::Search => Action::SearchCompleted {
            route,
            result: client.fetch_profile(&handle).await,
        },
        FetchTarget::Pivot => Action::PivotCompleted {
            route,
            result: client.fetch_profile(&handle).await,
        },
        FetchTarget::Organizations => Action::OrganizationsLoaded {
            route,
            result: client.fetch_organizations(&handle).await,
        },
        FetchTarget::Repositories => Action::RepositoriesLoaded {
            route,
            result: client.fetch_repositories(&handle).await,
        },
        FetchTarget::Followers => Action::FollowersLoaded {
            route,
            result: client.fetch_followers(&handle).await,
        },
    }
}

/// Opens a deep link. Only a failure produces a follow-up action.
pub fn open_link(opener: &dyn LinkOpener, route: RouteId, url: &str) -> Option<Action> {
    info!("Opening {} (route {})", url, route);
    opener
        .open(url)
        .err()
        .map(|error| Action::LinkOpenFailed { route, error })
}

/// Runs an effect to completion and returns the follow-up action, if any.
///
/// `Effect::Quit` is not handled here; callers check for it first.
pub async fn perform(
    client: &dyn RemoteClient,
    opener: &dyn LinkOpener,
    effect: Effect,
) -> Option<Action> {
    match effect {
        Effect::None | Effect::Quit => None,
        Effect::Fetch(request) => Some(perform_fetch(client, request).await),
        Effect::OpenLink { route, url } => open_link(opener, route, &url),
    }
}

/// Applies `action` and every follow-up it causes, in order, awaiting each
/// fetch inline. Returns `true` once a quit was requested.
pub async fn dispatch(
    app: &mut App,
    client: &dyn RemoteClient,
    opener: &dyn LinkOpener,
    action: Action,
) -> bool {
    let mut next = Some(action);
    while let Some(action) = next.take() {
        let effect = update(app, action);
        if effect == Effect::Quit {
            return true;
        }
        next = perform(client, opener, effect).await;
    }
    false
}

/// Spawns a fetch on the tokio runtime; the completion arrives on `tx`.
pub fn spawn_fetch(client: Arc<dyn RemoteClient>, request: FetchRequest, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning {:?} fetch for '{}' (route {})",
        request.target, request.handle, request.route
    );
    tokio::spawn(async move {
        let action = perform_fetch(client.as_ref(), request).await;
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
