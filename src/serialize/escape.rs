use std::fmt::{self, Write};

/// `"\"` (U+005C) followed by the character.
///
/// https://drafts.csswg.org/cssom/#escape-a-character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapedCharacter(pub char);

impl fmt::Display for EscapedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\\')?;
        f.write_char(self.0)
    }
}

/// `"\"` (U+005C), followed by the code point as the smallest possible number
/// of lowercase hexadecimal digits, followed by a single U+0020 SPACE.
///
/// The space is always written. It ends the escape even when the next
/// character would otherwise be read as another hex digit.
///
/// Any `u32` is accepted, including surrogates.
///
/// https://drafts.csswg.org/cssom/#escape-a-character-as-code-point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapedCodePoint(pub u32);

impl From<char> for EscapedCodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl fmt::Display for EscapedCodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{:x} ", self.0)
    }
}

#[cfg(feature = "alloc")]
mod alloc {
    use alloc::string::{String, ToString};

    use super::{EscapedCharacter, EscapedCodePoint};

    /// https://drafts.csswg.org/cssom/#escape-a-character
    pub fn escape_character(c: char) -> String {
        EscapedCharacter(c).to_string()
    }

    /// https://drafts.csswg.org/cssom/#escape-a-character-as-code-point
    pub fn escape_character_as_code_point(code_point: u32) -> String {
        EscapedCodePoint(code_point).to_string()
    }
}

#[cfg(feature = "alloc")]
pub use self::alloc::{escape_character, escape_character_as_code_point};
