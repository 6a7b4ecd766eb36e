//! Theme configuration for Startup App Launcher.
//!
//! This module provides theming constants for iced.

use iced::{Color, Theme};

/// Application theme.
pub fn app_theme() -> Theme {
    Theme::Dark
}

/// Application colors.
pub mod colors {
    use super::Color;

    /// Text primary
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);

    /// Text muted (frozen countdown)
    pub const TEXT_MUTED: Color = Color::from_rgb(0.53, 0.53, 0.53);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: u16 = 4;
    /// Small spacing (8px)
    pub const SM: u16 = 8;
    /// Medium spacing (12px)
    pub const MD: u16 = 12;
}

/// Font sizes.
pub mod font {
    /// Normal font size
    pub const NORMAL: u16 = 12;
    /// Header font size
    pub const HEADER: u16 = 14;
}
