//! Dictionary facade: the single entry store plus the search engine.

use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::results::ScoredResult;
use lexis_core::{Entry, EntryStore, FormatError};
use serde_json::Value;
use std::sync::Arc;

/// Owns the current entry store.
///
/// A reload builds a complete new store before replacing the old one, so
/// readers never observe a partially built index. A failed load leaves the
/// previous store untouched.
pub struct Dictionary {
    store: Option<Arc<EntryStore>>,
    engine: SearchEngine,
    /// Bumped on every successful load.
    revision: u64,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Create operations.
impl Dictionary {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            store: None,
            engine: SearchEngine::new(config),
            revision: 0,
        }
    }

    /// Loads a deserialized dataset, returning the number of entries kept.
    pub fn load(&mut self, raw: &Value) -> Result<usize, FormatError> {
        let store = EntryStore::load(raw)?;
        Ok(self.publish(store))
    }

    /// Parses JSON text and loads it.
    pub fn load_json(&mut self, text: &str) -> lexis_core::Result<usize> {
        let store = EntryStore::from_json(text)?;
        Ok(self.publish(store))
    }

    fn publish(&mut self, store: EntryStore) -> usize {
        let len = store.len();
        self.store = Some(Arc::new(store));
        self.revision += 1;
        len
    }
}

/// Read operations.
impl Dictionary {
    pub fn is_ready(&self) -> bool {
        self.store.as_ref().is_some_and(|store| !store.is_empty())
    }

    pub fn len(&self) -> usize {
        self.store.as_ref().map_or(0, |store| store.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &SearchConfig {
        self.engine.config()
    }

    /// Snapshot of the current store. Stays valid across reloads.
    pub fn store(&self) -> Option<Arc<EntryStore>> {
        self.store.clone()
    }

    /// Exact case-insensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<&Entry> {
        let (_, entry) = self.store.as_ref()?.lookup(word)?;
        Some(entry)
    }

    pub fn random_entry(&self) -> Option<&Entry> {
        self.store.as_ref()?.random_entry()
    }

    /// Returns `min(count, len)` distinct entries, empty when unloaded.
    pub fn random_entries(&self, count: usize) -> Vec<&Entry> {
        self.store
            .as_ref()
            .map(|store| store.random_entries(count))
            .unwrap_or_default()
    }

    /// Ranked search. Returns nothing when unloaded or for an empty query.
    pub fn search(&self, query: &str) -> Vec<ScoredResult> {
        match &self.store {
            Some(store) => self.engine.search(store, query),
            None => Vec::new(),
        }
    }
}
