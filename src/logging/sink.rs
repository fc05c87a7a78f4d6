// caller_log/src/logging/sink.rs
//
// Destinations for log entries and the process-wide sink registry

use std::error::Error;
use std::fmt::Write as _;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;

use super::{CallerLocation, Level};

/// A single log call after tag and message have been resolved.
///
/// Nothing in here outlives the call that produced it.
#[derive(Debug, Clone, Copy)]
pub struct LogEntry<'a> {
    pub level: Level,
    pub tag: &'a str,
    /// Trimmed message with the caller suffix already appended
    pub message: &'a str,
    pub error: Option<&'a (dyn Error + 'static)>,
    pub location: CallerLocation,
}

impl LogEntry<'_> {
    /// Hand the entry to the sink operation matching its level
    pub fn dispatch(&self, sink: &dyn LogSink) {
        match self.level {
            Level::Verbose => sink.verbose(self.tag, self.message, self.error),
            Level::Debug => sink.debug(self.tag, self.message, self.error),
            Level::Info => sink.info(self.tag, self.message, self.error),
            Level::Warn => sink.warn(self.tag, self.message, self.error),
            Level::Error => sink.error(self.tag, self.message, self.error),
            Level::Assert => sink.wtf(self.tag, self.message, self.error),
        }
    }
}

/// The underlying log destination.
///
/// One operation per severity level. The message already carries the
/// caller suffix; sinks only decide where and how it ends up.
pub trait LogSink: Send + Sync {
    fn verbose(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>);

    fn debug(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>);

    fn info(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>);

    fn warn(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>);

    fn error(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>);

    /// "What a terrible failure": conditions that should never happen
    fn wtf(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>);

    /// Whether entries for `tag` at `level` would be recorded at all.
    /// Returning `false` lets the helpers skip formatting.
    fn is_loggable(&self, _level: Level, _tag: &str) -> bool {
        true
    }
}

/// Render an error and its chain of sources, one per line
pub fn stack_trace_string(error: &(dyn Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, "\nCaused by: {}", cause);
        source = cause.source();
    }
    out
}

fn with_error(message: &str, error: Option<&(dyn Error + 'static)>) -> String {
    match error {
        Some(err) => format!("{}\n{}", message, stack_trace_string(err)),
        None => message.to_string(),
    }
}

/// Sink forwarding to the `log` facade, with the tag as target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacadeSink;

impl LogFacadeSink {
    fn emit(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        log::log!(target: tag, level.as_log_level(), "{}", with_error(message, error));
    }
}

impl LogSink for LogFacadeSink {
    fn verbose(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.emit(Level::Verbose, tag, message, error);
    }

    fn debug(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.emit(Level::Debug, tag, message, error);
    }

    fn info(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.emit(Level::Info, tag, message, error);
    }

    fn warn(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.emit(Level::Warn, tag, message, error);
    }

    fn error(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.emit(Level::Error, tag, message, error);
    }

    fn wtf(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.emit(Level::Assert, tag, message, error);
    }

    fn is_loggable(&self, level: Level, tag: &str) -> bool {
        log::log_enabled!(target: tag, level.as_log_level())
    }
}

/// Sink forwarding to `tracing` events; the tag travels as a field
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn verbose(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        tracing::trace!(tag, "{}", with_error(message, error));
    }

    fn debug(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        tracing::debug!(tag, "{}", with_error(message, error));
    }

    fn info(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        tracing::info!(tag, "{}", with_error(message, error));
    }

    fn warn(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        tracing::warn!(tag, "{}", with_error(message, error));
    }

    fn error(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        tracing::error!(tag, "{}", with_error(message, error));
    }

    fn wtf(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        tracing::error!(tag, assert = true, "{}", with_error(message, error));
    }

    fn is_loggable(&self, level: Level, _tag: &str) -> bool {
        match level {
            Level::Verbose => tracing::enabled!(tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Error | Level::Assert => tracing::enabled!(tracing::Level::ERROR),
        }
    }
}

lazy_static! {
    static ref SINK: RwLock<Arc<dyn LogSink>> = RwLock::new(Arc::new(LogFacadeSink));
}

/// Install `sink` as the destination of the free logging functions,
/// returning the sink it replaces
pub fn set_sink(sink: Arc<dyn LogSink>) -> Arc<dyn LogSink> {
    let mut guard = SINK.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    std::mem::replace(&mut *guard, sink)
}

/// Go back to the default `log` facade sink
pub fn reset_sink() -> Arc<dyn LogSink> {
    set_sink(Arc::new(LogFacadeSink))
}

/// The sink currently receiving entries
pub fn current_sink() -> Arc<dyn LogSink> {
    SINK.read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}
