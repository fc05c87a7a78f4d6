// caller_log/src/lib.rs
//
// Leveled logging that tags each line with the caller's file and line

// Export modules
pub mod errors;
pub mod logging;
pub mod macros;

// Re-export the types callers reach for most
pub use errors::LoggingError;
pub use logging::{CallerLocation, IntoMessage, IntoTag, Level, LogSink, Tag};

// The log_* macros are #[macro_export] and live at the crate root.
