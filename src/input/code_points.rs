//! https://drafts.csswg.org/css-syntax-3/#tokenizer-definitions

// U+0000 NULL
pub const NULL: u32 = 0x0000;
// U+0009 CHARACTER TABULATION
pub const CHARACTER_TABULATION: u32 = 0x0009;

pub const LF: u32 = 0x000A;
// U+000C FORM FEED (FF)
pub const FF: u32 = 0x000C;
// U+000D CARRIAGE RETURN (CR)
pub const CR: u32 = 0x000D;

pub const SPACE: u32 = 0x0020;
// U+0022 QUOTATION MARK (")
pub const QUOTATION_MARK: u32 = 0x0022;

pub const HYPHEN_MINUS: u32 = 0x002D;
// U+005C REVERSE SOLIDUS
pub const REVERSE_SOLIDUS: u32 = 0x005C;
// U+005F LOW LINE (_)
pub const LOW_LINE: u32 = 0x005F;
// U+007F DELETE
pub const DELETE: u32 = 0x007F;

/// https://drafts.csswg.org/css-syntax-3/#maximum-allowed-code-point
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// https://drafts.csswg.org/css-syntax-3/#digit
pub const fn is_digit(c: u32) -> bool {
    matches!(c, 0x0030..=0x0039)
}

/// A [digit](is_digit), or a code point between U+0041 (A) and U+0046 (F)
/// inclusive, or a code point between U+0061 (a) and U+0066 (f) inclusive.
///
/// https://drafts.csswg.org/css-syntax-3/#hex-digit
pub const fn is_hex_digit(c: u32) -> bool {
    #[allow(clippy::match_like_matches_macro)] // for rustfmt
    match c {
        0x0030..=0x0039 | 0x0041..=0x0046 | 0x0061..=0x0066 => true,
        _ => false,
    }
}

/// https://drafts.csswg.org/css-syntax-3/#uppercase-letter
pub const fn is_uppercase_letter(c: u32) -> bool {
    matches!(c, 0x0041..=0x005A)
}

/// https://drafts.csswg.org/css-syntax-3/#lowercase-letter
pub const fn is_lowercase_letter(c: u32) -> bool {
    matches!(c, 0x0061..=0x007A)
}

/// https://drafts.csswg.org/css-syntax-3/#letter
pub const fn is_letter(c: u32) -> bool {
    is_uppercase_letter(c) || is_lowercase_letter(c)
}

/// A code point with a value equal to or greater than U+0080 \<control\>.
///
/// https://drafts.csswg.org/css-syntax-3/#non-ascii-code-point
pub const fn is_non_ascii(c: u32) -> bool {
    c >= 0x0080
}

/// https://drafts.csswg.org/css-syntax-3/#ident-start-code-point
pub const fn is_ident_start_code_point(c: u32) -> bool {
    match c {
        // letter
        0x0041..=0x005A | 0x0061..=0x007A => true,
        // non-ASCII
        0x0080.. => true,
        LOW_LINE => true,
        _ => false,
    }
}

/// https://drafts.csswg.org/css-syntax-3/#ident-code-point
pub const fn is_ident_code_point(c: u32) -> bool {
    match c {
        // digit
        0x0030..=0x0039 => true,
        HYPHEN_MINUS => true,
        c => is_ident_start_code_point(c),
    }
}

/// https://drafts.csswg.org/css-syntax-3/#non-printable-code-point
pub const fn is_non_printable_code_point(c: u32) -> bool {
    matches!(c, 0x0000..=0x0008 | 0x000B | 0x000E..=0x001F | DELETE)
}

/// [`LF`], [`CR`] or [`FF`].
///
/// CSS Syntax only names LF here because CR and FF are rewritten to LF while
/// [filtering code points](crate::input::filter). This predicate accepts all
/// three so it gives the same answer on raw and filtered input.
///
/// https://drafts.csswg.org/css-syntax-3/#newline
pub const fn is_newline(c: u32) -> bool {
    matches!(c, LF | CR | FF)
}

/// A [newline](is_newline), U+0009 CHARACTER TABULATION, or U+0020 SPACE.
///
/// https://drafts.csswg.org/css-syntax-3/#whitespace
pub const fn is_whitespace(c: u32) -> bool {
    is_newline(c) || matches!(c, CHARACTER_TABULATION | SPACE)
}

/// https://drafts.csswg.org/css-syntax-3/#maximum-allowed-code-point
pub const fn is_lower_than_max_code_point(c: u32) -> bool {
    c <= MAX_CODE_POINT
}

/// https://infra.spec.whatwg.org/#leading-surrogate
pub const fn is_leading_surrogate(c: u32) -> bool {
    matches!(c, 0xD800..=0xDBFF)
}

/// https://infra.spec.whatwg.org/#trailing-surrogate
pub const fn is_trailing_surrogate(c: u32) -> bool {
    matches!(c, 0xDC00..=0xDFFF)
}

/// https://infra.spec.whatwg.org/#surrogate
pub const fn is_surrogate(c: u32) -> bool {
    is_leading_surrogate(c) || is_trailing_surrogate(c)
}
