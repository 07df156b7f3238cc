use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow cron jobs and CI systems to distinguish a healthy
/// snapshot from one that crossed the alert threshold or could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - snapshot loaded, breach count below threshold (or no threshold)
    Success = 0,
    /// Breach count reached the configured alert threshold
    BreachesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, store error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BreachesDetected => write!(f, "Breaches Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for serving and rendering snapshots.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Snapshot store is not configured: {reason}\n\n💡 Hint: {hint}")]
    StoreNotConfigured { reason: String, hint: String },

    #[error("Failed to read seed snapshot: {path}\nDetails: {details}\n\n💡 Hint: Point --seed at a JSON snapshot file")]
    SeedFileError { path: PathBuf, details: String },

    #[error("Failed to bind HTTP listener on {addr}\nDetails: {details}\n\n💡 Hint: Check that the address is free or pick another with --bind")]
    BindError { addr: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values and arguments
    #[error("Validation error: {message}")]
    Validation { message: String },
}
