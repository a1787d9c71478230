#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate core as std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod input;

pub mod serialize;

pub use input::checks::{
    first_code_points, starts_valid_escape, would_start_a_number, would_start_an_identifier,
};
pub use input::code_points::{
    is_digit, is_hex_digit, is_ident_code_point, is_ident_start_code_point, is_leading_surrogate,
    is_letter, is_lower_than_max_code_point, is_lowercase_letter, is_newline, is_non_ascii,
    is_non_printable_code_point, is_surrogate, is_trailing_surrogate, is_uppercase_letter,
    is_whitespace,
};
pub use input::filter::needs_filtering;

#[cfg(feature = "alloc")]
pub use input::filter::filter_code_points;

pub use serialize::{
    identifier_is_verbatim, string_is_verbatim, CommaSeparated, CssString, EscapedCharacter,
    EscapedCodePoint, Identifier, Local, Url, WhitespaceSeparated,
};

#[cfg(feature = "alloc")]
pub use serialize::{
    escape_character, escape_character_as_code_point, serialize_comma_separated_list,
    serialize_identifier, serialize_local, serialize_string, serialize_url,
    serialize_whitespace_separated_list,
};
