//! Parsed struct field annotations.
//!
//! An annotation is a string of space-separated `key:"value"` pairs. A value
//! may be a comma-separated list; its first item is the "main" value and the
//! remaining items are "options" of that pair:
//!
//! ```text
//! json:"name,omitempty" db:"user_name"
//! ```
//!
//! [`Tag::parse`] never fails. Parsing stops quietly at the first malformed
//! position and keeps the pairs read so far. Every accessor treats a missing
//! key like an empty list, so there is nothing to unwrap.

mod parser;
mod quote;


use std::{collections::BTreeMap, convert::Infallible, fmt, str::FromStr};

use serde::Serialize;

pub use parser::{Pair, Pairs, pairs};
pub use quote::{UnquoteError, quote, unquote};

/// Key to value-list mapping parsed from an annotation string.
///
/// Each recorded list holds at least one item. Keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tag {
    entries: BTreeMap<String, Vec<String>>,
}

impl Tag {
    /// Parse an annotation string.
    ///
    /// When a key occurs more than once the last occurrence wins.
    ///
    /// ```
    /// use tagutil::Tag;
    ///
    /// let tag = Tag::parse(r#"json:"field,omitempty" doc:"required""#);
    /// assert_eq!(tag.first("json"), "field");
    /// assert!(tag.has_option("json", "omitempty"));
    /// assert_eq!(tag.num_options("doc"), 0);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut tag = Self::default();
        for Pair { key, value } in pairs(raw) {
            let values = value.split(',').map(String::from).collect();
            tag.entries.insert(key.to_string(), values);
        }
        tag
    }

    /// The full value list for `key`, or an empty slice.
    pub fn values(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// The items after the main value.
    pub fn options(&self, key: &str) -> &[String] {
        self.values(key).get(1..).unwrap_or_default()
    }

    /// The value list joined back with commas.
    ///
    /// Returns the empty string both when `key` is missing and when its value
    /// is empty; use [`Tag::len`] to tell the two apart.
    pub fn get(&self, key: &str) -> String {
        self.values(key).join(",")
    }

    /// Number of items in the value list, main value included.
    pub fn len(&self, key: &str) -> usize {
        self.values(key).len()
    }

    /// The main value, or the empty string.
    pub fn first(&self, key: &str) -> &str {
        self.values(key).first().map_or("", String::as_str)
    }

    /// The first option, or the empty string.
    pub fn second(&self, key: &str) -> &str {
        self.values(key).get(1).map_or("", String::as_str)
    }

    /// Reports whether any item of the value list equals `val`.
    pub fn contains(&self, key: &str, val: &str) -> bool {
        self.values(key).iter().any(|v| v == val)
    }

    /// Reports whether any option equals `val`. The main value is not an option.
    pub fn has_option(&self, key: &str, val: &str) -> bool {
        self.options(key).iter().any(|v| v == val)
    }

    /// Number of options, one less than [`Tag::len`] for a present key.
    pub fn num_options(&self, key: &str) -> usize {
        self.options(key).len()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key and value list pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }
}

/// Writes the tag back in annotation syntax, keys sorted.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", key, quote(&values.join(",")))?;
        }
        Ok(())
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl FromStr for Tag {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(raw))
    }
}
