//! Logging infrastructure for Startup App Launcher.
//!
//! This module provides:
//! - Global `tracing` subscriber setup honoring `RUST_LOG`
//! - Optional daily-rolling log file via `tracing-appender`
//!
//! # Example
//!
//! ```no_run
//! use sal_core::logging::{init_tracing_with_file, LogLevel};
//!
//! // Keep the guard alive until exit so buffered lines reach the file
//! let _guard = init_tracing_with_file(LogLevel::Info, std::path::Path::new("logs"));
//! tracing::info!("Launcher starting");
//! ```

mod types;

use std::fs;
use std::path::Path;

pub use types::LogLevel;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for rolling log files.
const LOG_FILE_NAME: &str = "startup-app-launcher.log";

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(default_level))
        .init();
}

/// Initialize tracing with stderr output plus a daily log file in `logs_dir`.
///
/// Returns the appender guard; dropping it flushes and stops the file writer.
/// If the directory cannot be created, falls back to stderr only.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(logs_dir) {
        init_tracing(default_level);
        tracing::warn!("Cannot create logs folder {}: {}", logs_dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(env_filter(default_level))
        .init();

    Some(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}
