use std::fmt;

use super::Emit;
use crate::input::code_points::{is_digit, is_letter, is_non_ascii};

/// https://drafts.csswg.org/cssom/#serialize-an-identifier
///
/// ```
/// use css_escape::Identifier;
///
/// assert_eq!(format!(".{}", Identifier("1st")), r".\31 st");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a>(pub &'a str);

/// Decides how the character `c` at `index` is serialized.
///
/// `first` is the first character of the identifier and `only_one` is true
/// if the identifier consists of exactly one character.
/// The first matching arm wins.
const fn emit(index: usize, c: char, first: Option<char>, only_one: bool) -> Emit {
    let u = c as u32;
    match (index, c) {
        (_, '\0') => Emit::Replacement,
        (_, '\u{0001}'..='\u{001F}' | '\u{007F}') => Emit::CodePoint,
        (0, _) if is_digit(u) => Emit::CodePoint,
        (1, _) if is_digit(u) && matches!(first, Some('-')) => Emit::CodePoint,
        (0, '-') if only_one => Emit::Escaped,
        (_, '-' | '_') => Emit::Verbatim,
        _ if is_non_ascii(u) || is_digit(u) || is_letter(u) => Emit::Verbatim,
        _ => Emit::Escaped,
    }
}

/// The first character and whether it is the only one.
const fn first_and_only(s: &str) -> (Option<char>, bool) {
    match konst::string::chars(s).next() {
        Some((c, rest)) => (Some(c), rest.next().is_none()),
        None => (None, false),
    }
}

/// Returns `true` if serializing `s` as an identifier yields `s` itself.
pub const fn identifier_is_verbatim(s: &str) -> bool {
    let (first, only_one) = first_and_only(s);

    let mut chars = konst::string::chars(s);
    let mut index = 0;
    while let Some((c, rest)) = chars.next() {
        if !emit(index, c, first, only_one).is_verbatim() {
            return false;
        }
        chars = rest;
        index += 1;
    }

    true
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;

        if identifier_is_verbatim(s) {
            return f.write_str(s);
        }

        let (first, only_one) = first_and_only(s);

        for (index, c) in s.chars().enumerate() {
            emit(index, c, first, only_one).write(c, f)?;
        }

        Ok(())
    }
}

#[cfg(feature = "alloc")]
mod alloc {
    use alloc::string::{String, ToString};

    use super::Identifier;

    /// https://drafts.csswg.org/cssom/#serialize-an-identifier
    pub fn serialize_identifier(identifier: &str) -> String {
        Identifier(identifier).to_string()
    }
}

#[cfg(feature = "alloc")]
pub use self::alloc::serialize_identifier;
