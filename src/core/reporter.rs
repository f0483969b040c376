//! # Error Reporter
//!
//! One slot for the user-facing error message. Screens never show errors
//! themselves; they call [`ErrorReporter::show`] and the presentation layer
//! renders whatever is in the slot while it is visible.
//!
//! ## Last write wins
//!
//! There is no queue. A second `show` before `dismiss` replaces the first
//! message and the first one is never displayed:
//!
//! ```text
//! show("a")  → { message: "a", visible: true }
//! show("b")  → { message: "b", visible: true }   // "a" is lost
//! dismiss()  → { message: "b", visible: false }
//! ```

use log::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub message: String,
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct ErrorReporter {
    state: ErrorState,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.state.visible {
            warn!(
                "Replacing visible error '{}' with '{}'",
                self.state.message, message
            );
        } else {
            warn!("Showing error: {}", message);
        }
        self.state = ErrorState {
            message,
            visible: true,
        };
    }

    /// Hides the slot. The message stays in place but is no longer meaningful.
    pub fn dismiss(&mut self) {
        self.state.visible = false;
    }

    pub fn state(&self) -> &ErrorState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    /// The message to render, if any.
    pub fn visible_message(&self) -> Option<&str> {
        self.state.visible.then_some(self.state.message.as_str())
    }
}
