//! Ordered, case-insensitive HTTP header map.
//!
//! Header names are folded to lowercase at insertion, so lookups are
//! case-insensitive and repeated names keep the last value written. Values
//! are stored as raw strings with no further decoding. Iteration follows
//! insertion order, which keeps serialized output deterministic within a
//! process run.

use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderMap {
    headers: IndexMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    /// Inserts a header, folding the name to lowercase. Last write wins.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
