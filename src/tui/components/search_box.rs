//! # SearchBox Component
//!
//! Single-line overlay where the user types a GitHub handle.
//!
//! The buffer is internal state and survives a failed search, so a typo
//! can be fixed in place. Closing the box clears it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use super::centered_line;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Submit(String),
    Close,
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
    /// Cursor as byte offset into `buffer`.
    cursor: usize,
    /// True while the search request is in flight.
    pub busy: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_line(60, area);
        frame.render_widget(Clear, overlay);

        let hint = if self.busy {
            " Buscando... "
        } else {
            " Enter buscar  Esc fechar "
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Buscar usuário ")
            .title_bottom(Line::from(hint).centered());

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, overlay);

        // Inside the left border; clamp so a long handle keeps the cursor in the box.
        let column = self.buffer[..self.cursor].width() as u16;
        let max_x = overlay.x + overlay.width.saturating_sub(2);
        let x = (overlay.x + 1 + column).min(max_x);
        frame.set_cursor_position((x, overlay.y + 1));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Escape => {
                self.clear();
                Some(SearchEvent::Close)
            }
            TuiEvent::Submit => {
                let query = self.buffer.trim();
                (!query.is_empty()).then(|| SearchEvent::Submit(query.to_string()))
            }
            TuiEvent::InputChar(c) => {
                let mut utf8 = [0u8; 4];
                self.insert(c.encode_utf8(&mut utf8));
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Handles are single-line: keep only what precedes the first newline.
                let line = text.lines().next().unwrap_or_default();
                self.insert(line);
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                SearchEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}
