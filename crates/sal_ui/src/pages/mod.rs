//! Page views.

pub mod launcher;
