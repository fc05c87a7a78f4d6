// Caller-aware logging for the caller_log crate
//
// Every entry point here:
// - resolves a tag from explicit text or from a type name
// - trims the message and appends " (<file>:<line>)" of the caller
// - hands the result to the sink operation matching the level
//
// There is no logger type to construct. The free functions are the whole
// surface and the destination is a process-wide sink (see sink.rs).

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LoggingError;

mod location;
mod message;
mod sink;
mod tag;

pub use location::CallerLocation;
pub use message::IntoMessage;
pub use sink::{
    current_sink, reset_sink, set_sink, stack_trace_string, LogEntry, LogFacadeSink, LogSink,
    TracingSink,
};
pub use tag::{IntoTag, Tag};

/// Severity of a log entry, from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    /// "What a terrible failure"
    Assert,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Verbose,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Assert,
    ];

    /// Classic numeric priority, 2 (verbose) to 7 (assert)
    pub fn priority(&self) -> u8 {
        match self {
            Level::Verbose => 2,
            Level::Debug => 3,
            Level::Info => 4,
            Level::Warn => 5,
            Level::Error => 6,
            Level::Assert => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Assert => "ASSERT",
        }
    }

    /// Matching level of the `log` facade. `log` has nothing above error,
    /// so assertions share it.
    pub fn as_log_level(&self) -> log::Level {
        match self {
            Level::Verbose => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Assert => log::Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "V" | "VERBOSE" => Ok(Level::Verbose),
            "D" | "DEBUG" => Ok(Level::Debug),
            "I" | "INFO" => Ok(Level::Info),
            "W" | "WARN" => Ok(Level::Warn),
            "E" | "ERROR" => Ok(Level::Error),
            "A" | "ASSERT" | "WTF" => Ok(Level::Assert),
            _ => Err(LoggingError::InvalidLevel(s.to_string())),
        }
    }
}

/// Log through an explicit sink instead of the process-wide one.
///
/// A missing tag or a missing message makes this a no-op. Text tags,
/// including an empty one, are passed through verbatim.
#[track_caller]
pub fn log_to<'a>(
    sink: &dyn LogSink,
    level: Level,
    tag: impl IntoTag<'a>,
    message: impl IntoMessage,
    error: Option<&(dyn Error + 'static)>,
) {
    let tag = match tag.into_tag() {
        Some(tag) => tag,
        None => return,
    };
    let text = match message.into_message() {
        Some(text) => text,
        None => return,
    };
    if !sink.is_loggable(level, tag.as_str()) {
        return;
    }

    let location = CallerLocation::capture();
    let line = message::render(&text, &location.suffix());
    LogEntry {
        level,
        tag: tag.as_str(),
        message: &line,
        error,
        location,
    }
    .dispatch(sink);
}

/// Log at `level` through the process-wide sink
#[track_caller]
pub fn log<'a>(level: Level, tag: impl IntoTag<'a>, message: impl IntoMessage) {
    log_to(&*current_sink(), level, tag, message, None);
}

/// Log at `level` through the process-wide sink, attaching `error`
#[track_caller]
pub fn log_with<'a>(
    level: Level,
    tag: impl IntoTag<'a>,
    message: impl IntoMessage,
    error: &(dyn Error + 'static),
) {
    log_to(&*current_sink(), level, tag, message, Some(error));
}

#[track_caller]
pub fn verbose<'a>(tag: impl IntoTag<'a>, message: impl IntoMessage) {
    log(Level::Verbose, tag, message);
}

#[track_caller]
pub fn debug<'a>(tag: impl IntoTag<'a>, message: impl IntoMessage) {
    log(Level::Debug, tag, message);
}

#[track_caller]
pub fn info<'a>(tag: impl IntoTag<'a>, message: impl IntoMessage) {
    log(Level::Info, tag, message);
}

#[track_caller]
pub fn warn<'a>(tag: impl IntoTag<'a>, message: impl IntoMessage) {
    log(Level::Warn, tag, message);
}

#[track_caller]
pub fn error<'a>(tag: impl IntoTag<'a>, message: impl IntoMessage) {
    log(Level::Error, tag, message);
}

/// Report a condition that should never happen
#[track_caller]
pub fn wtf<'a>(tag: impl IntoTag<'a>, message: impl IntoMessage) {
    log(Level::Assert, tag, message);
}

#[track_caller]
pub fn verbose_with<'a>(
    tag: impl IntoTag<'a>,
    message: impl IntoMessage,
    error: &(dyn Error + 'static),
) {
    log_with(Level::Verbose, tag, message, error);
}

#[track_caller]
pub fn debug_with<'a>(
    tag: impl IntoTag<'a>,
    message: impl IntoMessage,
    error: &(dyn Error + 'static),
) {
    log_with(Level::Debug, tag, message, error);
}

#[track_caller]
pub fn info_with<'a>(
    tag: impl IntoTag<'a>,
    message: impl IntoMessage,
    error: &(dyn Error + 'static),
) {
    log_with(Level::Info, tag, message, error);
}

#[track_caller]
pub fn warn_with<'a>(
    tag: impl IntoTag<'a>,
    message: impl IntoMessage,
    error: &(dyn Error + 'static),
) {
    log_with(Level::Warn, tag, message, error);
}

#[track_caller]
pub fn error_with<'a>(
    tag: impl IntoTag<'a>,
    message: impl IntoMessage,
    error: &(dyn Error + 'static),
) {
    log_with(Level::Error, tag, message, error);
}

#[track_caller]
pub fn wtf_with<'a>(
    tag: impl IntoTag<'a>,
    message: impl IntoMessage,
    error: &(dyn Error + 'static),
) {
    log_with(Level::Assert, tag, message, error);
}

/// Install `env_logger` as the `log` backend, reading `RUST_LOG` and
/// falling back to `info`
pub fn try_init() -> Result<(), LoggingError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;
    Ok(())
}

/// Like [`try_init`], ignoring a backend that is already installed
pub fn init() {
    let _ = try_init();
}
