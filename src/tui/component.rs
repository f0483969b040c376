use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may hold presentation
/// state, and render into a `Rect` of the frame.
///
/// `render` takes `&mut self` so stateful components (list cursors, the
/// search input) can update their state during the render pass, like
/// ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
