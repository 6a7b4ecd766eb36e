//! SAL Core - Backend logic for Startup App Launcher
//!
//! This crate contains all launcher logic with zero UI dependencies.
//! The launcher window (or a headless front end) drives the
//! [`launcher::LaunchController`] with discrete events and renders its
//! read-only view.

pub mod config;
pub mod launcher;
pub mod logging;
pub mod spawner;
pub mod startup;
pub mod targets;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
