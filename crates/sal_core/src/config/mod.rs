//! Configuration management for Startup App Launcher.
//!
//! This module covers the ambient `settings.toml` file (logging and window
//! options). The launch target list is separate; see [`crate::targets`].
//!
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Missing keys filled with defaults, unknown sections dropped on load
//!
//! # Example
//!
//! ```no_run
//! use sal_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new("settings.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Log level: {:?}", config.settings().logging.level);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult, SETTINGS_FILE_NAME};
pub use settings::{ConfigSection, LoggingSettings, Settings, WindowSettings};
