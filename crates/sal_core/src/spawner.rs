//! Process spawning.
//!
//! The launcher never waits on the processes it starts. A [`Spawner`] only
//! asks the OS to create the process and reports whether that succeeded.
//! [`SystemSpawner`] is the real implementation; tests substitute their own.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::targets::LaunchTarget;

/// Error raised when the OS refuses to create a process.
#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("Executable not found: {program}")]
    NotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied: {program}")]
    PermissionDenied {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl SpawnError {
    /// Classify an I/O error returned while spawning `program`.
    pub fn from_io(program: impl Into<String>, source: io::Error) -> Self {
        let program = program.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { program, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { program, source },
            _ => Self::Io { program, source },
        }
    }

    /// The program that failed to start.
    pub fn program(&self) -> &str {
        match self {
            Self::NotFound { program, .. }
            | Self::PermissionDenied { program, .. }
            | Self::Io { program, .. } => program,
        }
    }
}

/// What to hand to the OS for one target.
///
/// A target without arguments is passed as the bare path string; the OS (or
/// its shell conventions) decides how to interpret it. A target with arguments
/// is always program plus explicit argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnRequest<'a> {
    Bare(&'a str),
    WithArgs { program: &'a str, args: &'a [String] },
}

impl<'a> SpawnRequest<'a> {
    pub fn for_target(target: &'a LaunchTarget) -> Self {
        if target.args.is_empty() {
            Self::Bare(&target.path)
        } else {
            Self::WithArgs {
                program: &target.path,
                args: &target.args,
            }
        }
    }

    pub fn program(&self) -> &'a str {
        match self {
            Self::Bare(path) => path,
            Self::WithArgs { program, .. } => program,
        }
    }
}

/// Capability to start independent OS processes.
pub trait Spawner: Send + Sync {
    /// Start the process and return without waiting for it.
    fn spawn(&self, request: SpawnRequest<'_>) -> Result<(), SpawnError>;
}

/// Spawner backed by [`std::process::Command`].
///
/// Children get null stdio so they keep running after the launcher exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl SystemSpawner {
    pub fn new() -> Self {
        Self
    }

    /// Build the command for a request without starting it.
    pub fn build_command(request: SpawnRequest<'_>) -> Command {
        match request {
            SpawnRequest::Bare(line) => bare_command(line),
            SpawnRequest::WithArgs { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
        }
    }
}

impl Spawner for SystemSpawner {
    fn spawn(&self, request: SpawnRequest<'_>) -> Result<(), SpawnError> {
        let mut cmd = Self::build_command(request);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd
            .spawn()
            .map_err(|e| SpawnError::from_io(request.program(), e))?;

        tracing::debug!(pid = child.id(), "Spawned {}", request.program());
        Ok(())
    }
}

/// A bare path on Windows is a command line: if it is not an existing file,
/// the first token is the program and the remainder goes through untouched.
#[cfg(windows)]
fn bare_command(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    if std::path::Path::new(line).is_file() {
        return Command::new(line);
    }

    let (program, rest) = split_command_line(line);
    let mut cmd = Command::new(program);
    if !rest.is_empty() {
        cmd.raw_arg(rest);
    }
    cmd
}

#[cfg(not(windows))]
fn bare_command(line: &str) -> Command {
    Command::new(line)
}

/// Split a command line into its program token and the raw remainder.
///
/// A leading double-quoted token is taken as the program with the quotes
/// stripped.
#[cfg_attr(not(windows), allow(dead_code))]
fn split_command_line(line: &str) -> (&str, &str) {
    let line = line.trim();

    if let Some(quoted) = line.strip_prefix('"') {
        return match quoted.find('"') {
            Some(end) => (&quoted[..end], quoted[end + 1..].trim_start()),
            None => (quoted, ""),
        };
    }

    match line.find(char::is_whitespace) {
        Some(end) => (&line[..end], line[end..].trim_start()),
        None => (line, ""),
    }
}
