//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Launcher window options.
    #[serde(default)]
    pub window: WindowSettings,
}

/// Identifies a top-level settings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Logging,
    Window,
}

impl ConfigSection {
    pub const ALL: [ConfigSection; 2] = [ConfigSection::Logging, ConfigSection::Window];

    /// TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Logging => "logging",
            ConfigSection::Window => "window",
        }
    }

    /// Comment written above the table.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigSection::Logging => "Logging configuration",
            ConfigSection::Window => "Launcher window",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a daily log file.
    #[serde(default = "default_true")]
    pub log_to_file: bool,

    /// Folder for log files. Relative paths are resolved against the
    /// directory holding the settings file.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_true() -> bool {
    true
}

fn default_logs_folder() -> String {
    "logs".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_to_file: default_true(),
            logs_folder: default_logs_folder(),
        }
    }
}

/// Launcher window options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,

    /// Keep the launcher above other windows.
    #[serde(default = "default_true")]
    pub always_on_top: bool,

    /// Show the OS title bar and borders.
    #[serde(default)]
    pub decorations: bool,
}

fn default_width() -> f32 {
    350.0
}

fn default_height() -> f32 {
    300.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            always_on_top: default_true(),
            decorations: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_section_fills_defaults() {
        let settings: Settings = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();

        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert!(settings.logging.log_to_file);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn section_names_are_unique() {
        let names: Vec<_> = ConfigSection::ALL.iter().map(|s| s.table_name()).collect();
        assert_eq!(names, vec!["logging", "window"]);
    }
}
