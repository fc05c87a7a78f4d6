// caller_log/src/macros/mod.rs
//
// Formatting shims over the leveled logging functions.
// The location recorded is the macro call site, since the functions they
// expand to are #[track_caller].

/// Log a verbose message built from format arguments
///
/// # Examples
///
/// ```
/// use caller_log::log_verbose;
///
/// let peers = 3;
/// log_verbose!("Network", "connected to {} peers", peers);
/// ```
#[macro_export]
macro_rules! log_verbose {
    ($tag:expr, $($arg:tt)+) => {
        $crate::logging::verbose($tag, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($tag:expr, $($arg:tt)+) => {
        $crate::logging::debug($tag, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($tag:expr, $($arg:tt)+) => {
        $crate::logging::info($tag, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($tag:expr, $($arg:tt)+) => {
        $crate::logging::warn($tag, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($tag:expr, $($arg:tt)+) => {
        $crate::logging::error($tag, format_args!($($arg)+))
    };
}

/// Log a "what a terrible failure" message built from format arguments
#[macro_export]
macro_rules! log_wtf {
    ($tag:expr, $($arg:tt)+) => {
        $crate::logging::wtf($tag, format_args!($($arg)+))
    };
}
