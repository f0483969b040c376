//! Alert overlay for the message in the error slot.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::tui::component::Component;

use super::centered_rect;

pub struct Alert<'a> {
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for Alert<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(" Erro ")
            .title_bottom(Line::from(" Enter / Esc ").centered());

        let body = Paragraph::new(self.message)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, overlay);
    }
}
