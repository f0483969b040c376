//! # TitleBar Component
//!
//! Single-line bar at the top of the screen:
//!
//! 1. **Status message**: `"Octoscope | Followers | Carregando..."`
//! 2. **Default**: `"Octoscope | Home"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Name of the top route, e.g. "Repos".
    pub route_name: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(route_name: impl Into<String>, status_message: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            status_message: status_message.into(),
        }
    }

    pub fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Octoscope | {}", self.route_name)
        } else {
            format!("Octoscope | {} | {}", self.route_name, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Followers", "Carregando...");
        let text = rendered(&mut title_bar);
        assert!(text.contains("Octoscope | Followers | Carregando..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Home", "");
        let text = rendered(&mut title_bar);
        assert!(text.contains("Octoscope | Home"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
