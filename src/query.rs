//! Query-string codec over an insertion-ordered parameter map.
//!
//! ## Overview
//!
//! The query component of a location is advisory data for this core: it is
//! parsed best-effort, never load-bearing, and never a reason to fail a
//! navigation. [`parse_query`] and [`build_query`] are a bidirectional
//! mapping between a raw query string and a [`ParamMap`].
//!
//! ## Semantics
//!
//! - Duplicate keys: the last occurrence wins, consistent with standard
//!   query-string handling.
//! - A present key with no `=` is valid and maps to the empty string.
//! - [`build_query`] skips entries with empty values and emits a leading
//!   `?` only when at least one entry survives.
//! - Insertion order is preserved, so `parse_query(build_query(&m))`
//!   round-trips for maps with non-empty values.

use smallvec::SmallVec;

/// Maximum number of parameters stored inline before heap allocation.
/// Route and query parameter counts are small in practice; eight covers
/// any realistic admin-shell catalogue.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Insertion-ordered string map used for both path parameters and query
/// parameters.
///
/// Backed by a small inline vector so the common case allocates nothing
/// beyond the strings themselves. Keys are unique: inserting an existing
/// key overwrites its value in place, so a duplicate-carrying source like
/// a raw query string collapses to the last occurrence per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: SmallVec<[(String, String); MAX_INLINE_PARAMS]>,
}

impl ParamMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a key/value pair.
    ///
    /// An existing key is overwritten in place, keeping its original
    /// position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = ParamMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Parse a query string into a [`ParamMap`].
///
/// Accepts the raw query with or without the leading `?`. Splits on `&` and
/// `=`, percent-decoding keys and values. Duplicate keys collapse to the
/// last occurrence. Best-effort: malformed percent sequences decode lossily
/// and unparseable fragments are dropped rather than raised.
///
/// `parse_query("")` and `parse_query("?")` both yield an empty map.
///
/// # Example
///
/// ```rust
/// use waypoint::query::parse_query;
///
/// let q = parse_query("?page=2&sort=title");
/// assert_eq!(q.get("page"), Some("2"));
/// assert_eq!(q.get("sort"), Some("title"));
/// ```
#[must_use]
pub fn parse_query(raw: &str) -> ParamMap {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    url::form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Build a query string from a [`ParamMap`].
///
/// Entries with empty values are skipped; the remaining entries are emitted
/// in insertion order with percent-encoded keys and values. Returns the
/// empty string when nothing survives, otherwise the string carries a
/// leading `?`.
///
/// # Example
///
/// ```rust
/// use waypoint::query::{build_query, ParamMap};
///
/// let mut q = ParamMap::new();
/// q.insert("page", "2");
/// q.insert("filter", "");
/// assert_eq!(build_query(&q), "?page=2");
/// ```
#[must_use]
pub fn build_query(map: &ParamMap) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in map.iter() {
        if value.is_empty() {
            continue;
        }
        serializer.append_pair(key, value);
        any = true;
    }
    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn test_parse_basic() {
        let q = parse_query("a=1&b=2");
        assert_eq!(q.get("a"), Some("1"));
        assert_eq!(q.get("b"), Some("2"));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_parse_duplicate_last_wins() {
        let q = parse_query("limit=10&limit=20");
        assert_eq!(q.get("limit"), Some("20"));
    }

    #[test]
    fn test_parse_key_without_value() {
        let q = parse_query("flag");
        assert_eq!(q.get("flag"), Some(""));
    }

    #[test]
    fn test_parse_decodes() {
        let q = parse_query("q=hello%20world&title=a%26b");
        assert_eq!(q.get("q"), Some("hello world"));
        assert_eq!(q.get("title"), Some("a&b"));
    }

    #[test]
    fn test_build_skips_empty_values() {
        let mut m = ParamMap::new();
        m.insert("a", "1");
        m.insert("b", "");
        m.insert("c", "3");
        assert_eq!(build_query(&m), "?a=1&c=3");
    }

    #[test]
    fn test_build_empty_map() {
        assert_eq!(build_query(&ParamMap::new()), "");
        let mut m = ParamMap::new();
        m.insert("only", "");
        assert_eq!(build_query(&m), "");
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let mut m = ParamMap::new();
        m.insert("z", "26");
        m.insert("a", "first");
        m.insert("m", "mid dle");
        let rebuilt = parse_query(&build_query(&m));
        assert_eq!(rebuilt, m);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut m = ParamMap::new();
        m.insert("a", "1");
        m.insert("b", "2");
        m.insert("a", "3");
        let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(m.get("a"), Some("3"));
    }
}
