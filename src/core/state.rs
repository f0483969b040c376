//! # Application State
//!
//! Core state for Octoscope. Domain logic only, no TUI types. Presentation
//! state (list cursors, the search input buffer) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: Navigator       // route history, root first
//! ├── reporter: ErrorReporter    // the single error slot
//! └── web_root: String           // base for deep links
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::{DEFAULT_WEB_ROOT, ResolvedConfig};
use crate::core::navigator::{Destination, Navigator, Route};
use crate::core::reporter::ErrorReporter;
use crate::core::screens::ScreenContext;
use crate::core::session::{self, ProfileIdentity};

#[derive(Debug)]
pub struct App {
    pub navigator: Navigator,
    pub reporter: ErrorReporter,
    pub web_root: String,
}

impl App {
    /// Fresh launch: one anonymous Home route.
    pub fn new(web_root: impl Into<String>) -> Self {
        Self::with_identity(web_root, session::initialize(None))
    }

    pub fn with_identity(web_root: impl Into<String>, identity: ProfileIdentity) -> Self {
        Self {
            navigator: Navigator::new(Destination::Home(identity)),
            reporter: ErrorReporter::new(),
            web_root: web_root.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.web_root.clone())
    }

    pub fn context(&mut self) -> ScreenContext<'_> {
        ScreenContext {
            navigator: &mut self.navigator,
            reporter: &mut self.reporter,
            web_root: &self.web_root,
        }
    }

    pub fn current(&self) -> &Route {
        self.navigator.top()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_WEB_ROOT)
    }
}
