//! # Core Application Logic
//!
//! Octoscope's domain logic. It knows nothing about any specific UI
//! technology and performs no I/O of its own.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │          CORE           │
//!                    │                         │
//!                    │  • Navigator (routes)   │
//!                    │  • Session (identity)   │
//!                    │  • ErrorReporter        │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │  runtime   │              │    TUI     │
//!           │  fetches,  │              │  (ratatui) │
//!           │   links    │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`navigator`]: Route history and typed destinations
//! - [`screens`]: Per-screen controllers (Home, Orgs, Repos, Followers)

pub mod action;
pub mod config;
pub mod messages;
pub mod model;
pub mod navigator;
pub mod reporter;
pub mod screens;
pub mod session;
pub mod state;
