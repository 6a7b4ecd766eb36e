// Prevents an extra console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Startup App Launcher - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Command-line dispatch (normal run, `--setup`, `--remove-setup`)
//! - Settings loading and application-level logging initialization
//! - Target list loading (fatal before any window is shown)
//! - Application launch

use std::path::PathBuf;
use std::process::ExitCode;

use sal_core::config::{ConfigManager, SETTINGS_FILE_NAME};
use sal_core::launcher::LaunchController;
use sal_core::logging::{init_tracing, init_tracing_with_file, LogLevel};
use sal_core::spawner::SystemSpawner;
use sal_core::startup::{StartupError, StartupRegistrar};
use sal_core::targets::{load_targets, TARGETS_FILE_NAME};

mod app;
mod pages;
mod theme;

const USAGE: &str = "\
Usage: startup-app-launcher [OPTIONS]

Options:
  --config <PATH>   Launch target list (default: app-config.json next to the executable)
  --setup           Register the launcher to run at login, then exit
  --remove-setup    Remove the run-at-login registration, then exit
  -h, --help        Print this help
  -V, --version     Print version";

/// What the process was asked to do.
#[derive(Debug, PartialEq, Eq)]
enum CliCommand {
    Run { targets_path: Option<PathBuf> },
    Setup,
    RemoveSetup,
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliCommand, String> {
    let mut targets_path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--setup" => return Ok(CliCommand::Setup),
            "--remove-setup" => return Ok(CliCommand::RemoveSetup),
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "--config" => match args.next() {
                Some(path) => targets_path = Some(PathBuf::from(path)),
                None => return Err("--config requires a path".to_string()),
            },
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliCommand::Run { targets_path })
}

/// Directory holding the executable; config files live beside it.
fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Borrow the console of the shell that started a release build on Windows.
#[cfg(windows)]
fn attach_parent_console() {
    use windows_sys::Win32::System::Console::{AttachConsole, ATTACH_PARENT_PROCESS};

    // Fails when started from Explorer or at login; output then stays hidden
    unsafe {
        AttachConsole(ATTACH_PARENT_PROCESS);
    }
}

/// Report an error that ends the run before any window is shown.
/// Goes to stderr and to a native message box.
fn show_fatal_error(message: &str) {
    eprintln!("Error: {}", message);
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(app::TITLE)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn main() -> ExitCode {
    #[cfg(windows)]
    attach_parent_console();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match command {
        CliCommand::Help => {
            println!("{}", USAGE);
            ExitCode::SUCCESS
        }
        CliCommand::Version => {
            println!("startup-app-launcher {}", sal_core::version());
            ExitCode::SUCCESS
        }
        CliCommand::Setup => run_setup(true),
        CliCommand::RemoveSetup => run_setup(false),
        CliCommand::Run { targets_path } => run_launcher(targets_path),
    }
}

/// Install or remove the run-at-login entry.
fn run_setup(enable: bool) -> ExitCode {
    init_tracing(LogLevel::Warn);

    let result = StartupRegistrar::for_current_exe()
        .and_then(|registrar| apply_setup(&registrar, enable));

    match result {
        Ok(confirmation) => {
            println!("{}", confirmation);
            ExitCode::SUCCESS
        }
        Err(e) => {
            show_fatal_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Perform the registration change and return the line to confirm it with.
fn apply_setup(registrar: &StartupRegistrar, enable: bool) -> Result<String, StartupError> {
    if enable {
        let already_registered = registrar.is_registered();
        let path = registrar.register()?;
        if already_registered {
            Ok(format!("Startup entry updated ({})", path.display()))
        } else {
            Ok(format!("Added to startup successfully! ({})", path.display()))
        }
    } else if registrar.unregister()? {
        Ok("Removed from startup.".to_string())
    } else {
        Ok("Not registered for startup; nothing to remove.".to_string())
    }
}

/// Normal run: settings, logging, targets, then the launcher window.
fn run_launcher(targets_path: Option<PathBuf>) -> ExitCode {
    let base = base_dir();

    // Settings first (needed for logging); failures fall back to defaults
    let mut config = ConfigManager::new(base.join(SETTINGS_FILE_NAME));
    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
    }

    let logging = &config.settings().logging;
    let _log_guard = if logging.log_to_file {
        init_tracing_with_file(logging.level, &config.logs_folder())
    } else {
        init_tracing(logging.level);
        None
    };

    tracing::info!("Startup App Launcher starting");
    tracing::info!("Settings: {}", config.path().display());
    tracing::info!("Core version: {}", sal_core::version());

    let targets_path = targets_path.unwrap_or_else(|| base.join(TARGETS_FILE_NAME));
    let targets = match load_targets(&targets_path) {
        Ok(targets) => targets,
        Err(e) => {
            tracing::error!("Failed to load launch targets: {}", e);
            show_fatal_error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let controller = LaunchController::new(targets, Box::new(SystemSpawner::new()));

    tracing::info!("Application initialized, starting iced event loop");
    match app::run(controller, &config.settings().window) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Launcher window failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sal_core::startup::EntryFormat;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Result<CliCommand, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_args_runs_with_default_targets() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run { targets_path: None }));
    }

    #[test]
    fn config_flag_sets_targets_path() {
        assert_eq!(
            parse(&["--config", "/tmp/apps.json"]),
            Ok(CliCommand::Run {
                targets_path: Some(PathBuf::from("/tmp/apps.json"))
            })
        );
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn setup_flags_are_recognized() {
        assert_eq!(parse(&["--setup"]), Ok(CliCommand::Setup));
        assert_eq!(parse(&["--remove-setup"]), Ok(CliCommand::RemoveSetup));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse(&["--frobnicate"]).unwrap_err().contains("--frobnicate"));
    }

    #[test]
    fn setup_confirms_each_registration_change() {
        let dir = tempdir().unwrap();
        let registrar =
            StartupRegistrar::new(EntryFormat::XdgDesktop, dir.path(), "/usr/bin/startup-app-launcher");

        let added = apply_setup(&registrar, true).unwrap();
        assert!(added.starts_with("Added to startup successfully!"));

        let updated = apply_setup(&registrar, true).unwrap();
        assert!(updated.starts_with("Startup entry updated"));

        assert_eq!(apply_setup(&registrar, false).unwrap(), "Removed from startup.");
        assert_eq!(
            apply_setup(&registrar, false).unwrap(),
            "Not registered for startup; nothing to remove."
        );
    }

    #[test]
    fn setup_failure_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let registrar = StartupRegistrar::new(EntryFormat::XdgDesktop, blocker.join("sub"), "/bin/true");
        assert!(matches!(apply_setup(&registrar, true), Err(StartupError::Write { .. })));
    }
}
