//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: route name and status line
//! - `ProfileHeader`: the identity shown by the top route
//! - `Alert`: the visible error message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit events:
//! - `RouteListState` / `RouteList`: cursor over the menu or the fetched list
//! - `SearchBox`: handle input for the Home search
//!
//! Components get their data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ProfileHeader::new(app.current().identity()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! profile_header.render(frame, area); // reads from App
//! ```

mod alert;
mod profile_header;
pub mod route_list;
pub mod search_box;
mod title_bar;

pub use alert::Alert;
pub use profile_header::ProfileHeader;
pub use route_list::{RouteList, RouteListState, RowActivated};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// A bordered one-line box (height 3), centered horizontally and vertically.
pub(crate) fn centered_line(percent_x: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
