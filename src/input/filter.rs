//! https://drafts.csswg.org/css-syntax-3/#css-filter-code-points

/// Returns `true` if [`filter_code_points`] would change `s`,
/// that is, `s` contains U+000D CR, U+000C FF or U+0000 NULL.
pub const fn needs_filtering(s: &str) -> bool {
    let mut chars = konst::string::chars(s);

    while let Some((c, rest)) = chars.next() {
        if matches!(c, '\r' | '\u{000C}' | '\0') {
            return true;
        }
        chars = rest;
    }

    false
}

#[cfg(feature = "alloc")]
mod alloc {
    use alloc::{borrow::Cow, string::String};

    use super::needs_filtering;

    /// Replaces U+000D CR followed by U+000A LF, a lone U+000D CR and U+000C FF
    /// with a single U+000A LF, and U+0000 NULL with U+FFFD REPLACEMENT CHARACTER.
    ///
    /// Borrows `s` if nothing needs to be replaced.
    pub fn filter_code_points(s: &str) -> Cow<'_, str> {
        if !needs_filtering(s) {
            return Cow::Borrowed(s);
        }

        let mut res = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    chars.next_if_eq(&'\n');
                    res.push('\n');
                }
                '\u{000C}' => res.push('\n'),
                '\0' => res.push(char::REPLACEMENT_CHARACTER),
                c => res.push(c),
            }
        }

        Cow::Owned(res)
    }
}

#[cfg(feature = "alloc")]
pub use self::alloc::filter_code_points;

#[cfg(test)]
mod tests {
    use super::*;

    const _: () = {
        assert!(!needs_filtering(""));
        assert!(!needs_filtering("a\nb"));
        assert!(needs_filtering("a\r\nb"));
        assert!(needs_filtering("\u{000C}"));
        assert!(needs_filtering("a\0"));
    };

    #[test]
    #[cfg(feature = "alloc")]
    fn test_filter() {
        use ::alloc::borrow::Cow;

        assert!(matches!(filter_code_points("a\nb"), Cow::Borrowed("a\nb")));

        assert_eq!(filter_code_points("a\r\nb"), "a\nb");
        assert_eq!(filter_code_points("a\rb"), "a\nb");
        assert_eq!(filter_code_points("a\r\r\nb"), "a\n\nb");
        assert_eq!(filter_code_points("a\n\rb"), "a\n\nb");
        assert_eq!(filter_code_points("a\u{000C}b"), "a\nb");
        assert_eq!(filter_code_points("\0x\0"), "\u{FFFD}x\u{FFFD}");
        assert_eq!(filter_code_points("\r"), "\n");
    }
}
