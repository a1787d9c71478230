//! Checks the tokenizer performs on the next two or three code points.
//!
//! Callers looking past the end of input pass `0` (U+0000 NULL) for the
//! missing code points. After [filtering](super::filter) a NULL never occurs in
//! the input, and NULL never starts an escape, an identifier or a number, so
//! the answer is the same as if the code point were absent.

use super::code_points::{
    is_digit, is_ident_start_code_point, is_newline, HYPHEN_MINUS, REVERSE_SOLIDUS,
};

// U+002B PLUS SIGN (+)
const PLUS_SIGN: u32 = 0x002B;
// U+002E FULL STOP (.)
const FULL_STOP: u32 = 0x002E;

/// https://drafts.csswg.org/css-syntax-3/#check-if-two-code-points-are-a-valid-escape
pub const fn starts_valid_escape(first: u32, second: u32) -> bool {
    first == REVERSE_SOLIDUS && !is_newline(second)
}

/// https://drafts.csswg.org/css-syntax-3/#check-if-three-code-points-would-start-an-ident-sequence
pub const fn would_start_an_identifier(first: u32, second: u32, third: u32) -> bool {
    match first {
        HYPHEN_MINUS => {
            second == HYPHEN_MINUS
                || is_ident_start_code_point(second)
                || starts_valid_escape(second, third)
        }
        REVERSE_SOLIDUS => starts_valid_escape(first, second),
        c => is_ident_start_code_point(c),
    }
}

/// https://drafts.csswg.org/css-syntax-3/#check-if-three-code-points-would-start-a-number
pub const fn would_start_a_number(first: u32, second: u32, third: u32) -> bool {
    match first {
        PLUS_SIGN | HYPHEN_MINUS => {
            is_digit(second) || (second == FULL_STOP && is_digit(third))
        }
        FULL_STOP => is_digit(second),
        c => is_digit(c),
    }
}

/// The first `N` code points of `s`, padded with `0` past the end.
///
/// ```
/// use css_escape::{first_code_points, would_start_an_identifier};
///
/// let [a, b, c] = first_code_points::<3>("-foo");
/// assert!(would_start_an_identifier(a, b, c));
/// ```
pub const fn first_code_points<const N: usize>(s: &str) -> [u32; N] {
    let mut res = [0u32; N];
    let mut chars = konst::string::chars(s);

    let mut i = 0;
    while i < N {
        if let Some((c, rest)) = chars.next() {
            res[i] = c as u32;
            chars = rest;
            i += 1;
        } else {
            break;
        }
    }

    res
}
