//! Tiered search over an entry store.
//!
//! 1. Exact hit through the store's exact index (score 100).
//! 2. Linear scan: prefix (90) and substring (80) hits are "fast matches".
//!    Everything else is deferred to a bounded pool when the query is long
//!    enough. The scan stops after `fast_match_limit` fast matches.
//! 3. Only when few results were found, the deferred pool is scored by the
//!    matcher in load order.
//! 4. Stable sort by score, descending, and truncate.

use crate::config::SearchConfig;
use crate::matcher::{self, CONTAINS_SCORE, EXACT_SCORE, PREFIX_SCORE};
use crate::results::ScoredResult;
use lexis_core::{Entry, EntryStore};
use tracing::debug;

pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns results ordered by score, highest first.
    ///
    /// An empty (or all-whitespace) query yields no results.
    pub fn search(&self, store: &EntryStore, query: &str) -> Vec<ScoredResult> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let config = &self.config;
        let mut results = Vec::new();

        let exact = store.lookup_folded(&query).map(|(position, entry)| {
            results.push(ScoredResult::from_entry(entry, EXACT_SCORE));
            position
        });

        let defer = query.chars().count() >= config.fuzzy_min_query_chars;
        let mut deferred: Vec<(&Entry, &str)> = Vec::new();
        let mut fast_matches = 0;

        for (position, entry, word) in store.iter() {
            if exact == Some(position) {
                continue;
            }

            let score = if word.starts_with(&query) {
                PREFIX_SCORE
            } else if word.contains(&query) {
                CONTAINS_SCORE
            } else {
                if defer && deferred.len() < config.fuzzy_pool_limit {
                    deferred.push((entry, word));
                }
                continue;
            };

            results.push(ScoredResult::from_entry(entry, score));
            fast_matches += 1;
            if fast_matches >= config.fast_match_limit {
                break;
            }
        }

        let fuzzy = results.len() < config.fuzzy_trigger_below && !deferred.is_empty();
        if fuzzy {
            for (entry, word) in deferred.iter().copied() {
                if results.len() >= config.result_limit {
                    break;
                }
                let score = matcher::score_folded(word, &query);
                if score > 0 {
                    results.push(ScoredResult::from_entry(entry, score));
                }
            }
        }

        // `sort_by` is stable, ties keep load order.
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(config.result_limit);

        debug!(
            query = %query,
            results = results.len(),
            fast_matches,
            deferred = deferred.len(),
            fuzzy,
            "search finished"
        );
        results
    }
}
