use std::fmt::{self, Write};

use super::Emit;
use crate::input::code_points::{DELETE, NULL, QUOTATION_MARK, REVERSE_SOLIDUS};

/// `'"'` (U+0022), followed by each character of the string escaped as needed,
/// followed by `'"'` (U+0022).
///
/// `'` (U+0027) is never escaped because the output is always quoted with `"`.
///
/// https://drafts.csswg.org/cssom/#serialize-a-string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssString<'a>(pub &'a str);

const fn emit(c: char) -> Emit {
    match c as u32 {
        NULL => Emit::Replacement,
        0x0001..=0x001F | DELETE => Emit::CodePoint,
        QUOTATION_MARK | REVERSE_SOLIDUS => Emit::Escaped,
        _ => Emit::Verbatim,
    }
}

/// Returns `true` if the serialized string is `s` wrapped in `"` without any escapes.
pub const fn string_is_verbatim(s: &str) -> bool {
    let mut chars = konst::string::chars(s);

    while let Some((c, rest)) = chars.next() {
        if !emit(c).is_verbatim() {
            return false;
        }
        chars = rest;
    }

    true
}

impl fmt::Display for CssString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;

        if string_is_verbatim(self.0) {
            f.write_str(self.0)?;
        } else {
            for c in self.0.chars() {
                emit(c).write(c, f)?;
            }
        }

        f.write_char('"')
    }
}

/// `url(`, followed by the URL [serialized as a string](CssString), followed by `)`.
///
/// https://drafts.csswg.org/cssom/#serialize-a-url
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Url<'a>(pub &'a str);

impl fmt::Display for Url<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "url({})", CssString(self.0))
    }
}

/// `local(`, followed by the font name [serialized as a string](CssString), followed by `)`.
///
/// https://drafts.csswg.org/cssom/#serialize-a-local
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Local<'a>(pub &'a str);

impl fmt::Display for Local<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "local({})", CssString(self.0))
    }
}

#[cfg(feature = "alloc")]
mod alloc {
    use alloc::string::{String, ToString};

    use super::{CssString, Local, Url};

    /// https://drafts.csswg.org/cssom/#serialize-a-string
    pub fn serialize_string(s: &str) -> String {
        CssString(s).to_string()
    }

    /// https://drafts.csswg.org/cssom/#serialize-a-url
    pub fn serialize_url(url: &str) -> String {
        Url(url).to_string()
    }

    /// https://drafts.csswg.org/cssom/#serialize-a-local
    pub fn serialize_local(local: &str) -> String {
        Local(local).to_string()
    }
}

#[cfg(feature = "alloc")]
pub use self::alloc::{serialize_local, serialize_string, serialize_url};
