//! Code points as seen by the [CSS tokenizer](https://drafts.csswg.org/css-syntax-3/#tokenization).
//!
//! Note that [`char`] is a subset of code point: surrogates are code points
//! but not Unicode scalar values, so the predicates here take `u32`.

pub mod code_points;

pub mod checks;

pub mod filter;
