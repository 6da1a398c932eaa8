//! Tokenizer for `key:"value"` annotation strings.
//!
//! The scan is byte oriented and best effort: it yields pairs until it meets
//! something it cannot read (a bad key, a missing quote, an invalid escape)
//! and then stops for good. Whatever was read before that point is kept.

use std::{borrow::Cow, iter::FusedIterator};

use super::quote::unquote;

/// One `key:"value"` occurrence, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<'a> {
    pub key: &'a str,
    /// The unquoted value, before splitting on commas.
    pub value: Cow<'a, str>,
}

/// Iterator over the pairs of an annotation string. See [`pairs`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    rest: &'a str,
}

/// Tokenize `raw` into its `key:"value"` pairs.
///
/// Duplicate keys are yielded as often as they occur. The iterator ends at
/// the end of input or at the first malformed position, whichever comes first.
///
/// ```
/// use tagutil::tag::pairs;
///
/// let keys: Vec<_> = pairs(r#"json:"id" db:"user_id" broken"#)
///     .map(|pair| pair.key)
///     .collect();
/// assert_eq!(keys, ["json", "db"]);
/// ```
pub fn pairs(raw: &str) -> Pairs<'_> {
    Pairs { rest: raw }
}

impl<'a> Pairs<'a> {
    /// The input that has not been consumed yet.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }

    fn scan_pair(&mut self) -> Option<Pair<'a>> {
        // Only ASCII space separates pairs; tabs and newlines end the scan.
        let rest = self.rest.trim_start_matches(' ');
        self.rest = rest;
        if rest.is_empty() {
            return None;
        }

        let bytes = rest.as_bytes();
        let key_len = bytes.iter().take_while(|&&b| is_key_byte(b)).count();
        if key_len == 0
            || bytes.get(key_len) != Some(&b':')
            || bytes.get(key_len + 1) != Some(&b'"')
        {
            return None;
        }
        let key = &rest[..key_len];

        // `quoted` starts at the opening quote.
        let quoted = &rest[key_len + 1..];
        let end = closing_quote(quoted.as_bytes())?;
        let value = unquote(&quoted[..=end]).ok()?;

        self.rest = &quoted[end + 1..];
        Some(Pair { key, value })
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Pair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.scan_pair();
        if pair.is_none() {
            self.rest = "";
        }
        pair
    }
}

impl FusedIterator for Pairs<'_> {}

fn is_key_byte(b: u8) -> bool {
    b > b' ' && b != b':' && b != b'"' && b != 0x7F
}

/// Index of the quote closing the literal that opens at `quoted[0]`.
/// A backslash hides the byte after it.
fn closing_quote(quoted: &[u8]) -> Option<usize> {
    let mut i = 1;
    while i < quoted.len() && quoted[i] != b'"' {
        if quoted[i] == b'\\' {
            i += 1;
        }
        i += 1;
    }
    (i < quoted.len()).then_some(i)
}
