//! URL query-string parsing.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Immutable key/value view of a URL query string.
///
/// Entries written without `=` (for example `?debug`) are kept with a `None` value so callers can
/// tell a bare flag apart from an empty assignment (`?debug=`).
pub struct SearchParams {
    entries: HashMap<String, Option<String>>,
}

impl SearchParams {
    /// Parses a query string, with or without its leading `?`.
    ///
    /// Pairs are split on `&`, then on the first `=`. Keys and values are percent-decoded; a
    /// component that does not decode to valid UTF-8 is kept verbatim. Empty segments are skipped
    /// and later duplicates replace earlier ones.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let entries = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode_component(key), Some(decode_component(value))),
                None => (decode_component(segment), None),
            })
            .collect();
        Self { entries }
    }

    /// Returns the value for `key`, or `None` when the key is absent or carried no `=`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|value| value.as_deref())
    }

    /// Returns the raw entry for `key`, distinguishing a bare flag (`Some(None)`) from absence.
    pub fn entry(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|value| value.as_deref())
    }

    /// Returns whether `key` appeared in the query at all.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the query had no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }
}

fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
