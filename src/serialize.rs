//! https://drafts.csswg.org/cssom/#common-serializing-idioms
//!
//! Every serializer is a [`Display`](std::fmt::Display) adapter, so it can be
//! written into any [`Write`](std::fmt::Write) sink without allocating.
//! With the `alloc` feature, `serialize_*` and `escape_*` return a `String`.

mod escape;
pub use escape::{EscapedCharacter, EscapedCodePoint};

mod identifier;
pub use identifier::{identifier_is_verbatim, Identifier};

mod string;
pub use string::{string_is_verbatim, CssString, Local, Url};

mod list;
pub use list::{CommaSeparated, WhitespaceSeparated};

#[cfg(feature = "alloc")]
pub use escape::{escape_character, escape_character_as_code_point};

#[cfg(feature = "alloc")]
pub use identifier::serialize_identifier;

#[cfg(feature = "alloc")]
pub use string::{serialize_local, serialize_string, serialize_url};

#[cfg(feature = "alloc")]
pub use list::{serialize_comma_separated_list, serialize_whitespace_separated_list};

/// What a serializer writes for one character of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    /// U+FFFD REPLACEMENT CHARACTER
    Replacement,
    /// [`EscapedCodePoint`]
    CodePoint,
    /// [`EscapedCharacter`]
    Escaped,
    Verbatim,
}

impl Emit {
    const fn is_verbatim(self) -> bool {
        matches!(self, Self::Verbatim)
    }

    fn write(self, c: char, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::{Display, Write};

        match self {
            Emit::Replacement => f.write_char(char::REPLACEMENT_CHARACTER),
            Emit::CodePoint => EscapedCodePoint(c as u32).fmt(f),
            Emit::Escaped => EscapedCharacter(c).fmt(f),
            Emit::Verbatim => f.write_char(c),
        }
    }
}
