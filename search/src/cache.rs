//! Bounded query -> results cache with first-in-first-out eviction.
//!
//! Reads do not refresh an entry; the oldest inserted query is always the
//! next one evicted.

use crate::results::ScoredResult;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::debug;

pub struct ResultCache {
    capacity: usize,
    entries: HashMap<String, Arc<[ScoredResult]>>,
    /// Queries in insertion order, oldest first.
    order: VecDeque<String>,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn get(&self, query: &str) -> Option<Arc<[ScoredResult]>> {
        self.entries.get(query).cloned()
    }

    /// Stores `results` under `query`.
    ///
    /// Re-inserting a cached query replaces its results but keeps its
    /// original place in the eviction order.
    pub fn put(&mut self, query: impl Into<String>, results: Arc<[ScoredResult]>) {
        if self.capacity == 0 {
            return;
        }

        let query = query.into();
        if let Some(slot) = self.entries.get_mut(&query) {
            *slot = results;
            return;
        }

        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            debug!(query = %oldest, "evicted cached results");
        }

        self.order.push_back(query.clone());
        self.entries.insert(query, results);
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(entries = self.entries.len(), "cleared result cache");
        }
        self.entries.clear();
        self.order.clear();
    }
}
