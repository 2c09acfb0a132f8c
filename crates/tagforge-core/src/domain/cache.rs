//! Generation timestamp cache.

use std::collections::BTreeMap;

/// Maps an absolute output path to the metadata modification time (ms since
/// the epoch) it was generated from.
///
/// Values are kept as strings, the way they are persisted; an entry that
/// does not parse is treated as stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationCache {
    entries: BTreeMap<String, String>,
}

impl GenerationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn record(&mut self, key: impl Into<String>, millis: u64) {
        self.entries.insert(key.into(), millis.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// True when the entry exists and is not older than `modified`.
    pub fn is_current(&self, key: &str, modified: u64) -> bool {
        self.get(key)
            .and_then(|v| v.parse::<u64>().ok())
            .is_some_and(|cached| cached >= modified)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}
