// caller_log/src/logging/message.rs
//
// Conversion of log call arguments into message text

use std::fmt;

/// Anything that can be logged as a message.
///
/// Any `&T` where `T: Display` qualifies. Owned `String`s, primitives and
/// `format_args!` output are accepted directly; other owned values are
/// passed by reference (`&value`). `None` turns the call into a no-op.
pub trait IntoMessage {
    /// Text form of the message, before trimming
    fn into_message(self) -> Option<String>;
}

impl<M: fmt::Display + ?Sized> IntoMessage for &M {
    fn into_message(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoMessage for String {
    fn into_message(self) -> Option<String> {
        Some(self)
    }
}

macro_rules! owned_display_message {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoMessage for $ty {
                fn into_message(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

owned_display_message!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl IntoMessage for fmt::Arguments<'_> {
    fn into_message(self) -> Option<String> {
        Some(fmt::format(self))
    }
}

impl<M: IntoMessage> IntoMessage for Option<M> {
    fn into_message(self) -> Option<String> {
        self.and_then(IntoMessage::into_message)
    }
}

/// Message text as it is handed to the sink: trimmed, then suffixed
pub(crate) fn render(text: &str, suffix: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len() + suffix.len());
    out.push_str(trimmed);
    out.push_str(suffix);
    out
}
