use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, quits from anywhere.
    ForceQuit,
    Resize,
    Submit,
    Escape,

    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`. Terminal errors are logged and read as no event.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(event) => map_event(event),
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release events show up when the terminal reports event types
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code, key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('c'))
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(TuiEvent::Escape)
        );
        assert_eq!(
            map_event(key(KeyCode::Down, KeyModifiers::NONE)),
            Some(TuiEvent::CursorDown)
        );
        assert_eq!(
            map_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(TuiEvent::Submit)
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(release), None);
    }

    #[test]
    fn test_paste_and_resize() {
        assert_eq!(
            map_event(Event::Paste("octocat".to_string())),
            Some(TuiEvent::Paste("octocat".to_string()))
        );
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
