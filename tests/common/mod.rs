#![allow(dead_code)]

// Recording test double for LogSink

use std::error::Error;
use std::sync::Mutex;

use caller_log::logging::stack_trace_string;
use caller_log::{Level, LogSink};

/// One call received by the sink
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Name of the sink operation that was invoked
    pub op: &'static str,
    pub tag: String,
    pub message: String,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Record>>,
    muted: Option<Level>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink reporting `level` as not loggable
    pub fn muting(level: Level) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            muted: Some(level),
        }
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }

    fn push(&self, op: &'static str, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.records.lock().unwrap().push(Record {
            op,
            tag: tag.to_string(),
            message: message.to_string(),
            error: error.map(stack_trace_string),
        });
    }
}

impl LogSink for RecordingSink {
    fn verbose(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.push("verbose", tag, message, error);
    }

    fn debug(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.push("debug", tag, message, error);
    }

    fn info(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.push("info", tag, message, error);
    }

    fn warn(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.push("warn", tag, message, error);
    }

    fn error(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.push("error", tag, message, error);
    }

    fn wtf(&self, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.push("wtf", tag, message, error);
    }

    fn is_loggable(&self, level: Level, _tag: &str) -> bool {
        self.muted != Some(level)
    }
}

/// Sink operation each level is expected to reach
pub fn op_for(level: Level) -> &'static str {
    match level {
        Level::Verbose => "verbose",
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Warn => "warn",
        Level::Error => "error",
        Level::Assert => "wtf",
    }
}
