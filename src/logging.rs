//! Logging setup.
//!
//! The terminal UI owns the screen, so interactive sessions log to a file.
//! Batch commands log to stderr, leaving stdout for their output.

use std::fs::{self, File};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const APP_DIR: &str = "foodshare";
const LOG_FILE: &str = "foodshare.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes logging for the interactive console.
///
/// The log file is truncated on each run. If it cannot be created, logging is
/// left disabled rather than written over the UI.
pub fn init_file_logging() {
    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Initializes logging for batch commands.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the log file location.
///
/// `~/.local/state/foodshare/foodshare.log` on Linux; the config directory or
/// the temp directory elsewhere.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join(APP_DIR).join(LOG_FILE);
    }
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join(APP_DIR).join(LOG_FILE);
    }
    std::env::temp_dir().join(LOG_FILE)
}
