//! In-memory entry store.
//!
//! Design:
//! - `entries` keeps load order; duplicates are kept.
//! - `exact_index` maps the lowercased word to its position. On duplicate
//!   words the last one loaded wins.
//! - `sorted_words` holds positions in collation order (CLDR root, so
//!   "éclair" sorts between "dog" and "fig").
//! - `prefix_index` holds positions ordered by lowercased code points, which
//!   keeps every prefix range contiguous. `rank` maps a position back to its
//!   place in `sorted_words`.
//!
//! A store is built completely by [`EntryStore::load`] and never mutated
//! afterwards. Reloading means building a new store and swapping it in.

use crate::dataset;
use crate::error::FormatError;
use crate::types::Entry;
use feruca::Collator;
use rand::Rng;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

pub struct EntryStore {
    entries: Vec<Entry>,
    /// Lowercased words, parallel to `entries`.
    folded: Vec<String>,
    exact_index: HashMap<String, usize>,
    sorted_words: Vec<usize>,
    prefix_index: Vec<usize>,
    rank: Vec<usize>,
}

/// Create operations.
impl EntryStore {
    /// Normalizes a deserialized dataset and builds every index.
    pub fn load(raw: &Value) -> Result<Self, FormatError> {
        let normalized = dataset::normalize(raw).inspect_err(|error| {
            warn!(%error, "rejected dataset");
        })?;

        let store = Self::build(normalized.entries);
        info!(
            entries = store.len(),
            dropped = normalized.dropped,
            "loaded dataset"
        );
        Ok(store)
    }

    /// Parses JSON text and loads it. The caller is still responsible for
    /// fetching the text.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let raw: Value = serde_json::from_str(text)?;
        Ok(Self::load(&raw)?)
    }

    /// Builds a store from already validated entries.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, FormatError> {
        if entries.is_empty() {
            return Err(FormatError::EmptyDataset);
        }
        Ok(Self::build(entries))
    }

    fn build(entries: Vec<Entry>) -> Self {
        let folded: Vec<String> = entries.iter().map(Entry::folded_word).collect();

        let mut exact_index = HashMap::with_capacity(folded.len());
        for (position, word) in folded.iter().enumerate() {
            exact_index.insert(word.clone(), position);
        }

        let mut collator = Collator::default();
        let mut sorted_words: Vec<usize> = (0..entries.len()).collect();
        sorted_words.sort_by(|&a, &b| {
            collator
                .collate(entries[a].word().as_str(), entries[b].word().as_str())
                .then_with(|| folded[a].cmp(&folded[b]))
                .then_with(|| entries[a].word().as_str().cmp(entries[b].word().as_str()))
        });

        let mut rank = vec![0; entries.len()];
        for (place, &position) in sorted_words.iter().enumerate() {
            rank[position] = place;
        }

        let mut prefix_index: Vec<usize> = (0..entries.len()).collect();
        prefix_index.sort_by(|&a, &b| folded[a].cmp(&folded[b]).then(rank[a].cmp(&rank[b])));

        Self {
            entries,
            folded,
            exact_index,
            sorted_words,
            prefix_index,
            rank,
        }
    }
}

/// Read operations.
impl EntryStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    /// Iterates `(position, entry, lowercased word)` in load order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entry, &str)> + '_ {
        self.entries
            .iter()
            .zip(&self.folded)
            .enumerate()
            .map(|(position, (entry, folded))| (position, entry, folded.as_str()))
    }

    /// Exact case-insensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<(usize, &Entry)> {
        self.lookup_folded(&word.trim().to_lowercase())
    }

    /// Exact lookup by an already lowercased word.
    pub fn lookup_folded(&self, folded: &str) -> Option<(usize, &Entry)> {
        let position = *self.exact_index.get(folded)?;
        Some((position, &self.entries[position]))
    }

    /// Entries in collation order.
    pub fn sorted(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.sorted_words
            .iter()
            .map(|&position| &self.entries[position])
    }

    /// Entries whose lowercased word starts with `prefix`, in collation order.
    ///
    /// Prefixes match code points exactly: "e" does not match "éclair".
    pub fn with_prefix(&self, prefix: &str) -> Vec<&Entry> {
        let prefix = prefix.to_lowercase();
        let start = self
            .prefix_index
            .partition_point(|&position| self.folded[position].as_str() < prefix.as_str());

        let mut positions: Vec<usize> = self.prefix_index[start..]
            .iter()
            .copied()
            .take_while(|&position| self.folded[position].starts_with(&prefix))
            .collect();
        positions.sort_by_key(|&position| self.rank[position]);

        positions
            .into_iter()
            .map(|position| &self.entries[position])
            .collect()
    }
}

/// Random picks.
impl EntryStore {
    pub fn random_entry(&self) -> Option<&Entry> {
        self.random_entry_with(&mut rand::thread_rng())
    }

    pub fn random_entry_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Entry> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(rng.gen_range(0..self.entries.len()))
    }

    /// Returns `min(count, len)` distinct entries.
    pub fn random_entries(&self, count: usize) -> Vec<&Entry> {
        self.random_entries_with(count, &mut rand::thread_rng())
    }

    pub fn random_entries_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Entry> {
        self.random_positions_with(count, rng)
            .into_iter()
            .map(|position| &self.entries[position])
            .collect()
    }

    /// Draws distinct positions by uniform sampling, rejecting repeats.
    pub fn random_positions_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<usize> {
        let len = self.entries.len();
        if count >= len {
            return (0..len).collect();
        }

        let mut chosen = HashSet::with_capacity(count);
        let mut positions = Vec::with_capacity(count);
        while positions.len() < count {
            let position = rng.gen_range(0..len);
            if chosen.insert(position) {
                positions.push(position);
            }
        }
        positions
    }
}
