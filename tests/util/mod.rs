use std::marker::PhantomData;

use serde::{de::Visitor, Deserialize};

pub struct TestSuite<T, E> {
    pub input: T,
    pub expected: E,
}

/// A flat `[input, expected, input, expected, ...]` JSON array.
pub struct TestSuites<T, E>(pub Vec<TestSuite<T, E>>);

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for TestSuites<T, E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FlatVisitor<T, E>(PhantomData<(T, E)>);

        impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Visitor<'de> for FlatVisitor<T, E> {
            type Value = Vec<TestSuite<T, E>>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a test suite sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut res = Vec::new();

                while let Some(a) = seq.next_element::<T>()? {
                    let Some(b) = seq.next_element::<E>()? else {
                        return Err(<A::Error as serde::de::Error>::invalid_length(
                            res.len() * 2 + 1,
                            &"length of even number",
                        ));
                    };
                    res.push(TestSuite {
                        input: a,
                        expected: b,
                    })
                }

                Ok(res)
            }
        }

        deserializer
            .deserialize_seq(FlatVisitor(PhantomData))
            .map(TestSuites)
    }
}

pub fn load<T, E>(json: &'static str) -> Vec<TestSuite<T, E>>
where
    T: Deserialize<'static>,
    E: Deserialize<'static>,
{
    serde_json::from_str::<TestSuites<T, E>>(json).unwrap().0
}

/// Reads the value of a `<string-token>` back from a serialized string,
/// as a CSS tokenizer would.
///
/// `css` must start with `"` or `'`. Returns the value and the remaining input.
/// Input is filtered first, so the returned remainder may differ from the
/// tail of `css` in newlines and NULLs.
///
/// https://drafts.csswg.org/css-syntax-3/#consume-string-token
pub fn consume_string_token(css: &str) -> (String, String) {
    use css_escape::{is_newline, starts_valid_escape};

    let css = css_escape::filter_code_points(css);
    let mut chars = css.char_indices().peekable();

    let Some((_, ending)) = chars.next() else {
        panic!("expect a string token")
    };
    assert!(matches!(ending, '"' | '\''), "expect a string token: {css:?}");

    let mut value = String::new();
    while let Some((i, c)) = chars.next() {
        match c {
            c if c == ending => {
                return (value, css[i + c.len_utf8()..].to_owned());
            }
            c if is_newline(c as u32) => panic!("bad string: {css:?}"),
            '\\' => match chars.peek() {
                None => {}
                Some(&(_, next)) if !starts_valid_escape(c as u32, next as u32) => {
                    chars.next();
                }
                Some(_) => value.push(consume_escaped_code_point(&mut chars)),
            },
            c => value.push(c),
        }
    }

    // EOF
    (value, String::new())
}

/// https://drafts.csswg.org/css-syntax-3/#consume-escaped-code-point
fn consume_escaped_code_point(
    chars: &mut std::iter::Peekable<impl Iterator<Item = (usize, char)>>,
) -> char {
    use css_escape::{
        is_hex_digit, is_lower_than_max_code_point, is_surrogate, is_whitespace,
    };

    let Some((_, first)) = chars.next() else {
        return char::REPLACEMENT_CHARACTER;
    };

    if !is_hex_digit(first as u32) {
        return first;
    }

    let mut n = first.to_digit(16).unwrap();
    let mut len = 1;
    while len < 6 {
        match chars.peek() {
            Some(&(_, d)) if is_hex_digit(d as u32) => {
                chars.next();
                n = n * 16 + d.to_digit(16).unwrap();
                len += 1;
            }
            _ => break,
        }
    }

    if chars.peek().is_some_and(|&(_, c)| is_whitespace(c as u32)) {
        chars.next();
    }

    if n == 0 || is_surrogate(n) || !is_lower_than_max_code_point(n) {
        char::REPLACEMENT_CHARACTER
    } else {
        char::from_u32(n).unwrap()
    }
}
