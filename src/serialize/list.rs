use std::fmt;

fn write_separated<T: fmt::Display>(
    items: &[T],
    separator: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut items = items.iter();

    if let Some(first) = items.next() {
        fmt::Display::fmt(first, f)?;

        for item in items {
            f.write_str(separator)?;
            fmt::Display::fmt(item, f)?;
        }
    }

    Ok(())
}

/// Items in list order separated by `", "`.
///
/// https://drafts.csswg.org/cssom/#serialize-a-comma-separated-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommaSeparated<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for CommaSeparated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(self.0, ", ", f)
    }
}

/// Items in list order separated by a single U+0020 SPACE.
///
/// https://drafts.csswg.org/cssom/#serialize-a-whitespace-separated-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceSeparated<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for WhitespaceSeparated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(self.0, " ", f)
    }
}

#[cfg(feature = "alloc")]
mod alloc {
    use alloc::string::{String, ToString};
    use std::fmt::Display;

    use super::{CommaSeparated, WhitespaceSeparated};

    /// https://drafts.csswg.org/cssom/#serialize-a-comma-separated-list
    pub fn serialize_comma_separated_list<T: Display>(items: &[T]) -> String {
        CommaSeparated(items).to_string()
    }

    /// https://drafts.csswg.org/cssom/#serialize-a-whitespace-separated-list
    pub fn serialize_whitespace_separated_list<T: Display>(items: &[T]) -> String {
        WhitespaceSeparated(items).to_string()
    }
}

#[cfg(feature = "alloc")]
pub use self::alloc::{serialize_comma_separated_list, serialize_whitespace_separated_list};
