//! Config manager for loading and saving settings.
//!
//! Key features:
//! - Atomic writes (write to temp file, then rename)
//! - Validation on load (unknown sections removed, missing keys defaulted)

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml_edit::DocumentMut;

use super::settings::{ConfigSection, Settings};

/// Default file name of the settings file.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse config for editing: {0}")]
    EditParseError(#[from] toml_edit::TomlError),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages the settings file.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load_or_create()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load config from file, creating with defaults if it doesn't exist.
    ///
    /// Also validates and cleans up the config, saving if changes were made.
    pub fn load_or_create(&mut self) -> ConfigResult<()> {
        if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            let (settings, was_modified) = self.parse_validate_and_clean(&content)?;
            self.settings = settings;

            if was_modified {
                tracing::debug!("Rewriting normalized config {}", self.config_path.display());
                self.save()?;
            }
        } else {
            self.settings = Settings::default();
            self.save()?;
            tracing::info!("Created default config {}", self.config_path.display());
        }
        Ok(())
    }

    /// Get the logs folder path, resolved against the config file's directory.
    pub fn logs_folder(&self) -> PathBuf {
        let folder = PathBuf::from(&self.settings.logging.logs_folder);
        if folder.is_absolute() {
            return folder;
        }
        match self.config_path.parent() {
            Some(parent) => parent.join(folder),
            None => folder,
        }
    }

    /// Parse, validate, and clean up config content.
    ///
    /// Returns the settings and whether any modifications were made.
    fn parse_validate_and_clean(&self, content: &str) -> ConfigResult<(Settings, bool)> {
        let doc: DocumentMut = content.parse()?;

        // Missing fields take their defaults here
        let settings: Settings = toml::from_str(content)?;

        let has_unknown = doc.iter().any(|(key, _)| {
            !ConfigSection::ALL
                .iter()
                .any(|section| section.table_name() == key)
        });
        if has_unknown {
            tracing::warn!("Dropping unknown sections from {}", self.config_path.display());
        }

        let regenerated = generate_config_with_comments(&settings)?;
        let was_modified = has_unknown || content.trim() != regenerated.trim();

        Ok((settings, was_modified))
    }

    /// Save the entire config atomically.
    pub fn save(&self) -> ConfigResult<()> {
        let content = generate_config_with_comments(&self.settings)?;
        self.atomic_write(&content)?;
        Ok(())
    }

    /// Write content to config file atomically.
    ///
    /// Writes to a temp file first, then renames.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Same directory so the rename stays on one filesystem
        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }
}

/// Render the settings file with a comment above each section.
fn generate_config_with_comments(settings: &Settings) -> ConfigResult<String> {
    let mut output = String::new();

    output.push_str("# Startup App Launcher Configuration\n");
    output.push_str("# Launch targets live in app-config.json next to this file.\n\n");

    for (i, section) in ConfigSection::ALL.iter().enumerate() {
        let body = match section {
            ConfigSection::Logging => toml::to_string_pretty(&settings.logging)?,
            ConfigSection::Window => toml::to_string_pretty(&settings.window)?,
        };

        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("# {}\n", section.description()));
        output.push_str(&format!("[{}]\n", section.table_name()));
        for line in body.lines() {
            output.push_str(line);
            output.push('\n');
        }
    }

    Ok(output)
}
