//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! key ──► action_for_event() ──► update() ──► Effect
//!                                               ├── Fetch    → tokio task → mpsc → update()
//!                                               └── OpenLink → LinkOpener → update() on failure
//! ```
//!
//! The loop redraws only after an event or a fetch completion, polling faster
//! while the top screen is loading.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::screens::ScreenState;
use crate::core::state::App;
use crate::github::{GitHubClient, RemoteClient};
use crate::links::{LinkOpener, SystemLinkOpener};
use crate::runtime;
use crate::tui::component::EventHandler;
use crate::tui::components::{RouteListState, RowActivated, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);
const LOADING_POLL: Duration = Duration::from_millis(80);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub route_list: RouteListState,
    pub search_box: SearchBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligns presentation state with the top route.
    pub fn sync(&mut self, app: &App) {
        let route = app.current();
        self.route_list.sync(route);
        if !matches!(&route.screen, ScreenState::Home(home) if home.search_open) {
            self.search_box.clear();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Maps one terminal event to a core action for the current screen.
///
/// Precedence: Ctrl+C, then the alert, then the search box, then the screen.
pub fn action_for_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if app.reporter.is_visible() {
        return matches!(event, TuiEvent::Submit | TuiEvent::Escape).then_some(Action::DismissError);
    }

    tui.sync(app);
    let route = app.current();
    let on_home = matches!(route.screen, ScreenState::Home(_));

    if let ScreenState::Home(home) = &route.screen
        && home.search_open
    {
        return match tui.search_box.handle_event(event)? {
            SearchEvent::Submit(query) => Some(Action::SubmitSearch(query)),
            SearchEvent::Close => Some(Action::CloseSearch),
            SearchEvent::ContentChanged => None,
        };
    }

    match event {
        TuiEvent::Escape | TuiEvent::Backspace => Some(Action::Back),
        TuiEvent::InputChar('/') if on_home => Some(Action::OpenSearch),
        TuiEvent::InputChar('r') if on_home => Some(Action::ResetProfile),
        TuiEvent::InputChar('q') if on_home => Some(Action::Quit),
        _ => tui
            .route_list
            .handle_event(event)
            .map(|RowActivated(index)| Action::Select(index)),
    }
}

/// Applies an action and carries out its effect. Returns `true` on quit.
fn apply(
    app: &mut App,
    action: Action,
    client: &Arc<dyn RemoteClient>,
    opener: &dyn LinkOpener,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let mut next = Some(action);
    while let Some(action) = next.take() {
        match update(app, action) {
            Effect::Quit => return true,
            Effect::None => {}
            Effect::Fetch(request) => runtime::spawn_fetch(Arc::clone(client), request, tx.clone()),
            Effect::OpenLink { route, url } => next = runtime::open_link(opener, route, &url),
        }
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn RemoteClient> = Arc::new(
        GitHubClient::new(config.api_root.clone()).with_user_agent(config.user_agent.clone()),
    );
    let opener = SystemLinkOpener;
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e));

    // Channel for fetch completions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true;

    'event_loop: loop {
        tui.sync(&app);
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.current().screen.is_loading() {
            LOADING_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = action_for_event(&app, &mut tui, &event)
                && apply(&mut app, action, &client, &opener, &tx)
            {
                break 'event_loop;
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(&mut app, action, &client, &opener, &tx) {
                break 'event_loop;
            }
        }
    }

    info!("Octoscope shutting down");
    ratatui::restore();
    Ok(())
}
