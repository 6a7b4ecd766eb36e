//! Run-at-login registration.
//!
//! A one-shot side effect invoked from `--setup` / `--remove-setup`, never
//! during a normal launcher run. Each platform gets a per-user entry that
//! starts the launcher executable when the session begins:
//!
//! - Windows: a `.bat` file in the user's Startup folder
//! - macOS: a LaunchAgent plist in `~/Library/LaunchAgents`
//! - Other Unix: an XDG autostart `.desktop` file

mod entry;

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use entry::EntryFormat;

/// Errors that can occur while registering for startup.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Could not determine the per-user startup directory")]
    NoStartupDir,

    #[error("Failed to locate the launcher executable: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("Failed to write startup entry {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove startup entry {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Installs or removes the run-at-login entry for one executable.
#[derive(Debug, Clone)]
pub struct StartupRegistrar {
    format: EntryFormat,
    entry_dir: PathBuf,
    executable: PathBuf,
}

impl StartupRegistrar {
    /// Registrar for the running executable in this platform's startup location.
    pub fn for_current_exe() -> Result<Self, StartupError> {
        let executable = std::env::current_exe().map_err(StartupError::CurrentExe)?;
        let format = EntryFormat::native();
        let entry_dir = format.default_dir().ok_or(StartupError::NoStartupDir)?;
        Ok(Self::new(format, entry_dir, executable))
    }

    pub fn new(format: EntryFormat, entry_dir: impl Into<PathBuf>, executable: impl Into<PathBuf>) -> Self {
        Self {
            format,
            entry_dir: entry_dir.into(),
            executable: executable.into(),
        }
    }

    /// Full path of the entry file.
    pub fn entry_path(&self) -> PathBuf {
        self.entry_dir.join(self.format.file_name())
    }

    pub fn is_registered(&self) -> bool {
        self.entry_path().is_file()
    }

    /// Write (or overwrite) the startup entry. Returns its path.
    pub fn register(&self) -> Result<PathBuf, StartupError> {
        let path = self.entry_path();
        let content = self.format.render(&self.executable);

        fs::create_dir_all(&self.entry_dir)
            .and_then(|_| fs::write(&path, content))
            .map_err(|source| StartupError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::info!("Registered startup entry {}", path.display());
        Ok(path)
    }

    /// Delete the startup entry. Returns false if there was none.
    pub fn unregister(&self) -> Result<bool, StartupError> {
        let path = self.entry_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("Removed startup entry {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StartupError::Remove { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn register_then_unregister() {
        let dir = tempdir().unwrap();
        let entry_dir = dir.path().join("autostart");
        let registrar =
            StartupRegistrar::new(EntryFormat::XdgDesktop, &entry_dir, "/usr/bin/startup-app-launcher");

        assert!(!registrar.is_registered());

        let path = registrar.register().unwrap();
        assert_eq!(path, entry_dir.join("startup-app-launcher.desktop"));
        assert!(registrar.is_registered());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Exec=\"/usr/bin/startup-app-launcher\""));

        assert!(registrar.unregister().unwrap());
        assert!(!registrar.is_registered());
        assert!(!registrar.unregister().unwrap());
    }

    #[test]
    fn register_overwrites_existing_entry() {
        let dir = tempdir().unwrap();
        let registrar = StartupRegistrar::new(EntryFormat::WindowsBatch, dir.path(), r"C:\Apps\launcher.exe");

        fs::write(registrar.entry_path(), "stale").unwrap();
        registrar.register().unwrap();

        let content = fs::read_to_string(registrar.entry_path()).unwrap();
        assert!(content.contains(r#"start "" "C:\Apps\launcher.exe""#));
    }

    #[test]
    fn unwritable_dir_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let registrar = StartupRegistrar::new(EntryFormat::XdgDesktop, blocker.join("sub"), "/bin/true");
        assert!(matches!(registrar.register(), Err(StartupError::Write { .. })));
    }
}
