//! Launch target list loading.
//!
//! The target list is read once at startup from a JSON document of the form
//! `{"apps": [{"name", "path", "args", "enabled"}, ...]}`. Every field is
//! required; a missing file, malformed JSON, or an entry with an empty path
//! aborts the load. Nothing is defaulted.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default file name of the target list.
pub const TARGETS_FILE_NAME: &str = "app-config.json";

/// Errors that can occur while loading the target list.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Target list not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read target list {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse target list {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid target #{index} ('{name}'): {message}")]
    InvalidTarget {
        index: usize,
        name: String,
        message: String,
    },
}

/// One launchable application entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchTarget {
    /// Display label.
    pub name: String,
    /// Executable path or command.
    pub path: String,
    /// Arguments passed after the path. Empty means the path is used alone.
    pub args: Vec<String>,
    /// Initial selection state.
    #[serde(rename = "enabled")]
    pub default_enabled: bool,
}

impl LaunchTarget {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            args: Vec::new(),
            default_enabled: true,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.default_enabled = enabled;
        self
    }
}

/// On-disk layout of the target list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TargetFile {
    apps: Vec<LaunchTarget>,
}

/// Load the ordered target list from a JSON file.
pub fn load_targets(path: &Path) -> Result<Vec<LaunchTarget>, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let file: TargetFile =
        serde_json::from_str(&content).map_err(|source| ConfigLoadError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
    validate_targets(&file.apps)?;

    tracing::info!("Loaded {} launch targets from {}", file.apps.len(), path.display());
    Ok(file.apps)
}

/// Check every target has a usable path. Duplicate names are allowed but logged.
fn validate_targets(targets: &[LaunchTarget]) -> Result<(), ConfigLoadError> {
    let mut seen = HashSet::new();

    for (index, target) in targets.iter().enumerate() {
        if target.path.trim().is_empty() {
            return Err(ConfigLoadError::InvalidTarget {
                index,
                name: target.name.clone(),
                message: "path must not be empty".to_string(),
            });
        }
        if !seen.insert(target.name.as_str()) {
            tracing::warn!("Duplicate target name '{}' at #{}", target.name, index);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "apps": [
            {"name": "Notepad", "path": "notepad.exe", "args": [], "enabled": true},
            {"name": "Browser", "path": "/usr/bin/firefox", "args": ["--new-window", "about:blank"], "enabled": false}
        ]
    }"#;

    #[test]
    fn load_targets_preserves_order_and_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TARGETS_FILE_NAME);
        fs::write(&path, SAMPLE).unwrap();

        let targets = load_targets(&path).unwrap();

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0], LaunchTarget::new("Notepad", "notepad.exe"));
        assert_eq!(targets[1].name, "Browser");
        assert_eq!(targets[1].args, vec!["--new-window", "about:blank"]);
        assert!(!targets[1].default_enabled);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_targets(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TARGETS_FILE_NAME);
        fs::write(&path, "{ \"apps\": [ ").unwrap();

        let err = load_targets(&path).unwrap_err();
        assert!(matches!(err, ConfigLoadError::ParseError { .. }));
    }

    #[test]
    fn missing_field_is_not_defaulted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TARGETS_FILE_NAME);
        fs::write(
            &path,
            r#"{"apps": [{"name": "Calc", "path": "calc.exe", "enabled": true}]}"#,
        )
        .unwrap();

        let err = load_targets(&path).unwrap_err();
        assert!(matches!(err, ConfigLoadError::ParseError { .. }));
    }

    #[test]
    fn empty_path_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TARGETS_FILE_NAME);
        fs::write(
            &path,
            r#"{"apps": [{"name": "Ghost", "path": "  ", "args": [], "enabled": true}]}"#,
        )
        .unwrap();

        match load_targets(&path).unwrap_err() {
            ConfigLoadError::InvalidTarget { index, name, .. } => {
                assert_eq!(index, 0);
                assert_eq!(name, "Ghost");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_list_is_allowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TARGETS_FILE_NAME);
        fs::write(&path, r#"{"apps": []}"#).unwrap();

        assert!(load_targets(&path).unwrap().is_empty());
    }

    #[test]
    fn duplicate_names_are_accepted() {
        let targets = vec![
            LaunchTarget::new("Same", "a"),
            LaunchTarget::new("Same", "b"),
        ];
        assert!(validate_targets(&targets).is_ok());
    }
}
