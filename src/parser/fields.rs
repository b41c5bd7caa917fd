//! Tokenizing helpers shared by every parser.
//!
//! The `/proc` formats handled here are either rigid single lines or
//! append-only tables that grow new columns across kernel versions. Both are
//! read through the same small toolkit: decode bytes leniently, split into
//! tokens, then pick tokens by position with a bounds-checked accessor that
//! treats anything past the end as an empty token.

use std::borrow::Cow;
use std::str::FromStr;

use tracing::trace;

/// Multiplier applied to values carrying a `kB` suffix.
pub(crate) const KB: u64 = 1024;

/// Decodes raw file contents as text.
///
/// Invalid UTF-8 (a process may name itself with arbitrary bytes) is replaced
/// with U+FFFD instead of failing the record.
pub(crate) fn decode(data: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(data)
}

/// Splits `text` on whitespace and on any of the extra `separators`,
/// dropping empty tokens.
pub(crate) fn split_tokens<'a>(
    text: &'a str,
    separators: &'a [char],
) -> impl Iterator<Item = &'a str> {
    text.split(move |c: char| c.is_whitespace() || separators.contains(&c))
        .filter(|token| !token.is_empty())
}

/// Returns true for a `kB` unit suffix, in any letter case.
pub(crate) fn is_kb(unit: &str) -> bool {
    unit.eq_ignore_ascii_case("kb")
}

/// Parses a numeric token, falling back to zero.
///
/// An empty token is the normal "column not present" case and is not
/// reported; anything else that fails to parse is traced.
pub(crate) fn parse_or_zero<T>(token: &str) -> T
where
    T: FromStr + Default,
{
    match token.parse() {
        Ok(value) => value,
        Err(_) => {
            if !token.is_empty() {
                trace!(token, "unparsable numeric token, using zero");
            }
            T::default()
        }
    }
}

/// Positional view over a row of tokens.
///
/// Reading past the last token yields `""`, so short rows behave as if they
/// had been padded with empty tokens.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    tokens: &'a [&'a str],
}

impl<'a> Fields<'a> {
    pub(crate) fn new(tokens: &'a [&'a str]) -> Self {
        Self { tokens }
    }

    /// Token at `idx`, or `""` when the row is shorter.
    pub(crate) fn str(&self, idx: usize) -> &'a str {
        self.tokens.get(idx).copied().unwrap_or("")
    }

    /// Token at `idx` parsed as `T`, or zero when absent or unparsable.
    pub(crate) fn parse_or_zero<T>(&self, idx: usize) -> T
    where
        T: FromStr + Default,
    {
        parse_or_zero(self.str(idx))
    }
}
