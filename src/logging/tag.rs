// caller_log/src/logging/tag.rs
//
// Tag derivation: either explicit text or the simple name of a type

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

/// Label identifying where a log entry comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<'a> {
    /// Text used verbatim
    Text(Cow<'a, str>),
    /// Simple (unqualified) name of a type
    Type(Cow<'static, str>),
}

impl<'a> Tag<'a> {
    /// Use `text` verbatim as the tag
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Tag::Text(text.into())
    }

    /// Tag named after the type `T`
    pub fn of<T: ?Sized>() -> Tag<'static> {
        Tag::Type(simple_type_name(type_name::<T>()))
    }

    /// Tag named after the static type `T` of `value`.
    ///
    /// Behind a `&dyn Trait` this names the trait, not the concrete type.
    pub fn of_val<T: ?Sized>(_value: &T) -> Tag<'static> {
        Tag::of::<T>()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tag::Text(text) => text,
            Tag::Type(name) => name,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strip module paths and generic arguments from a fully qualified type
/// name, keeping tuple, slice, array, reference and pointer structure.
///
/// `alloc::vec::Vec<u8>` becomes `Vec`, `(app::Circle, u8)` becomes
/// `(Circle, u8)` and `&[app::Circle]` becomes `&[Circle]`.
pub(crate) fn simple_type_name(full: &'static str) -> Cow<'static, str> {
    if !full.contains("::") && !full.contains('<') {
        return Cow::Borrowed(full);
    }

    let mut out = String::with_capacity(full.len());
    // Start in `out` of the path segment being written
    let mut segment_start = 0;
    // Nesting inside generic arguments, which are dropped
    let mut depth = 0usize;
    let mut prev = '\0';
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '<' => depth += 1,
            // `->` of a fn signature, not the end of generic arguments
            '>' if prev == '-' => {
                if depth == 0 {
                    out.push(c);
                    segment_start = out.len();
                }
            }
            '>' => depth = depth.saturating_sub(1),
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                if depth == 0 {
                    out.truncate(segment_start);
                }
            }
            _ if depth > 0 => {}
            _ => {
                out.push(c);
                if !(c.is_alphanumeric() || c == '_') {
                    segment_start = out.len();
                }
            }
        }
        prev = c;
    }
    Cow::Owned(out)
}

/// Anything that can stand in as the tag of a log call.
///
/// `None` means "no tag", which turns the call into a no-op.
pub trait IntoTag<'a> {
    fn into_tag(self) -> Option<Tag<'a>>;
}

impl<'a, S: AsRef<str> + ?Sized> IntoTag<'a> for &'a S {
    fn into_tag(self) -> Option<Tag<'a>> {
        Some(Tag::Text(Cow::Borrowed(self.as_ref())))
    }
}

impl<'a> IntoTag<'a> for String {
    fn into_tag(self) -> Option<Tag<'a>> {
        Some(Tag::Text(Cow::Owned(self)))
    }
}

impl<'a> IntoTag<'a> for Cow<'a, str> {
    fn into_tag(self) -> Option<Tag<'a>> {
        Some(Tag::Text(self))
    }
}

impl<'a> IntoTag<'a> for Tag<'a> {
    fn into_tag(self) -> Option<Tag<'a>> {
        Some(self)
    }
}

impl<'a, T: IntoTag<'a>> IntoTag<'a> for Option<T> {
    fn into_tag(self) -> Option<Tag<'a>> {
        self.and_then(IntoTag::into_tag)
    }
}
