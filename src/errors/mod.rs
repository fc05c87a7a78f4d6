//! Error types for the caller_log crate
//!
//! Logging itself never fails from the caller's point of view. The only
//! fallible operations are parsing a level name and installing the
//! `env_logger` backend.

use thiserror::Error;

/// Errors raised by the configuration-facing parts of the crate
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Level name or code not recognised
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// A global logger was already installed for the `log` facade
    #[error("Logger initialisation failed: {0}")]
    LoggerInit(#[from] log::SetLoggerError),
}
