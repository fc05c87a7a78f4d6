// caller_log/src/logging/location.rs
//
// Source location of the first frame outside the logging helpers

use std::fmt;
use std::panic::Location;

/// Where a logging call was made.
///
/// Every public entry point of this crate is `#[track_caller]`, so the
/// location the compiler threads through them is the one of the call site
/// that sits outside the helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerLocation {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallerLocation {
    /// Capture the location of the caller
    #[track_caller]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Build a location by hand, mostly useful for sinks replaying entries
    pub fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Full path of the source file as reported by the compiler
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// File name without directories and without its extension.
    ///
    /// Only the text after the last `.` is dropped; a name without a dot is
    /// returned unchanged.
    pub fn file_stem(&self) -> &'static str {
        let name = match self.file.rfind(|c| c == '/' || c == '\\') {
            Some(idx) => &self.file[idx + 1..],
            None => self.file,
        };
        match name.rfind('.') {
            Some(idx) => &name[..idx],
            None => name,
        }
    }

    /// The text appended to every message: ` (<stem>:<line>)`
    pub fn suffix(&self) -> String {
        format!(" ({})", self)
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_stem(), self.line)
    }
}
