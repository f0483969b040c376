//! # Route List Component
//!
//! The body of every screen: the Home menu or the fetched list of the top
//! route. Follows the persistent state + transient wrapper pattern:
//! - `RouteListState` lives in `TuiState` and owns the cursor
//! - `RouteList` is created each frame with the route it draws
//!
//! The cursor belongs to one route instance. When the top route changes
//! (push, back, reset) the selection starts over at the first row.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::core::navigator::{Route, RouteId};
use crate::core::screens::{ScreenState, home};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const LOADING: &str = "Carregando...";
const EMPTY: &str = "Nada para mostrar.";

/// Persistent cursor for the list on screen.
#[derive(Debug, Default)]
pub struct RouteListState {
    pub list_state: ListState,
    route: Option<RouteId>,
    row_count: usize,
}

impl RouteListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows the top route. Must run before events are handled or the list is drawn.
    pub fn sync(&mut self, route: &Route) {
        let rows = route.screen.row_count();
        if self.route != Some(route.id()) {
            self.route = Some(route.id());
            self.list_state.select(None);
        }
        self.row_count = rows;
        match self.list_state.selected() {
            _ if rows == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= rows => self.list_state.select(Some(rows - 1)),
            Some(_) => {}
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }
}

/// Emitted when a row is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActivated(pub usize);

impl EventHandler for RouteListState {
    type Event = RowActivated;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<RowActivated> {
        match event {
            TuiEvent::CursorUp => {
                if let Some(i) = self.list_state.selected() {
                    self.list_state.select(Some(i.saturating_sub(1)));
                }
                None
            }
            TuiEvent::CursorDown => {
                if let Some(i) = self.list_state.selected()
                    && i + 1 < self.row_count
                {
                    self.list_state.select(Some(i + 1));
                }
                None
            }
            TuiEvent::Submit => self.list_state.selected().map(RowActivated),
            _ => None,
        }
    }
}

/// Transient render wrapper for the body list.
pub struct RouteList<'a> {
    route: &'a Route,
    state: &'a mut RouteListState,
}

impl<'a> RouteList<'a> {
    pub fn new(route: &'a Route, state: &'a mut RouteListState) -> Self {
        Self { route, state }
    }

    fn title(&self) -> &'static str {
        match self.route.screen {
            ScreenState::Home(_) => " Menu ",
            ScreenState::Orgs(_) => " Organizações ",
            ScreenState::Repos(_) => " Repositórios ",
            ScreenState::Followers(_) => " Seguidores ",
        }
    }

    fn rows(&self) -> Vec<ListItem<'a>> {
        let route: &'a Route = self.route;
        let dim = Style::default().fg(Color::DarkGray);
        match &route.screen {
            ScreenState::Home(_) => home::MENU
                .iter()
                .map(|entry| {
                    ListItem::new(Line::from(vec![
                        Span::raw(entry.label),
                        Span::raw("  "),
                        Span::styled(entry.description, dim),
                    ]))
                })
                .collect(),
            ScreenState::Orgs(listing) => listing
                .items
                .iter()
                .map(|org| ListItem::new(org.login_handle.as_str()))
                .collect(),
            ScreenState::Repos(listing) => listing
                .items
                .iter()
                .map(|repo| {
                    ListItem::new(Line::from(vec![
                        Span::raw(repo.name.as_str()),
                        Span::raw("  "),
                        Span::styled(repo.full_name.as_str(), dim),
                    ]))
                })
                .collect(),
            ScreenState::Followers(listing) => listing
                .items
                .iter()
                .map(|follower| ListItem::new(follower.login_handle.as_str()))
                .collect(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.title());

        let rows = self.rows();
        if rows.is_empty() {
            let text = if self.route.screen.is_loading() {
                LOADING
            } else {
                EMPTY
            };
            let placeholder = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
