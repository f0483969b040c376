//! Profile header: who the top route is showing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::session::ProfileIdentity;
use crate::tui::component::Component;

const NO_NAME: &str = "Sem nome";
const NO_HANDLE: &str = "nenhum usuário selecionado";

pub struct ProfileHeader<'a> {
    pub identity: &'a ProfileIdentity,
}

impl<'a> ProfileHeader<'a> {
    pub fn new(identity: &'a ProfileIdentity) -> Self {
        Self { identity }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let identity: &'a ProfileIdentity = self.identity;
        let name = identity.display_name().unwrap_or(NO_NAME);
        let handle = match identity.login_handle() {
            Some(handle) => format!("@{handle}"),
            None => NO_HANDLE.to_string(),
        };
        vec![
            Line::from(vec![
                Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(handle, Style::default().fg(Color::Cyan)),
            ]),
            Line::from(Span::styled(
                identity.avatar_url(),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Component for ProfileHeader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Perfil ");
        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}
