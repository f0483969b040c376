//! Octoscope library exports for testing

pub mod core;
pub mod github;
pub mod links;
pub mod runtime;
pub mod tui;

#[cfg(test)]
pub mod test_support;
