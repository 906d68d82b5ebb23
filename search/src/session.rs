//! Per-view search state: current query, cached results and pagination.
//!
//! Non-blocking API:
//! - `set_query()`: records the query; nothing runs yet
//! - `tick()`: runs the pending query against the dictionary
//! - `next_page()`: reveals results page by page
//!
//! Setting a new query before `tick()` replaces the pending one, so only the
//! latest query ever runs. Every query gets a [`QueryTicket`]; callers that
//! hand results to another place can compare tickets with
//! [`SearchSession::is_current`] and drop stale ones.

use crate::cache::ResultCache;
use crate::config::SearchConfig;
use crate::dictionary::Dictionary;
use crate::results::ScoredResult;
use std::sync::Arc;
use tracing::debug;

/// Identifies one `set_query` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryTicket(u64);

pub struct SearchSession {
    cache: ResultCache,
    cache_clear_threshold: usize,
    page_size: usize,
    generation: u64,
    pending: Option<String>,
    /// Dictionary revision the cached results were computed against.
    revision: u64,
    query: String,
    results: Arc<[ScoredResult]>,
    results_ticket: Option<QueryTicket>,
    shown: usize,
}

impl SearchSession {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            cache: ResultCache::new(config.cache_capacity),
            cache_clear_threshold: config.cache_clear_threshold,
            page_size: config.page_size.max(1),
            generation: 0,
            pending: None,
            revision: 0,
            query: String::new(),
            results: Arc::from(Vec::<ScoredResult>::new()),
            results_ticket: None,
            shown: 0,
        }
    }
}

/// Search operations.
impl SearchSession {
    /// Records `query` to run on the next `tick()`, superseding any query
    /// that has not run yet.
    pub fn set_query(&mut self, query: impl Into<String>) -> QueryTicket {
        if let Some(stale) = self.pending.take() {
            debug!(query = %stale, "superseded pending query");
        }
        self.generation += 1;
        self.pending = Some(query.into());
        QueryTicket(self.generation)
    }

    /// Runs the pending query, if any. Returns whether a query ran.
    pub fn tick(&mut self, dictionary: &Dictionary) -> bool {
        let Some(query) = self.pending.take() else {
            return false;
        };

        if self.revision != dictionary.revision() {
            self.cache.clear();
            self.revision = dictionary.revision();
        }

        let results = match self.cache.get(&query) {
            Some(hit) => {
                debug!(query = %query, results = hit.len(), "cache hit");
                hit
            }
            None => {
                let fresh: Arc<[ScoredResult]> = dictionary.search(&query).into();
                if dictionary.is_ready() && !query.trim().is_empty() {
                    self.cache.put(query.clone(), Arc::clone(&fresh));
                }
                fresh
            }
        };

        self.query = query;
        self.results = results;
        self.results_ticket = Some(QueryTicket(self.generation));
        self.shown = 0;
        true
    }

    /// Returns true if no query is waiting to run.
    pub fn is_finished(&self) -> bool {
        self.pending.is_none()
    }

    /// Whether `ticket` belongs to the most recent `set_query` call.
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Ticket of the query that produced [`Self::results`].
    pub fn results_ticket(&self) -> Option<QueryTicket> {
        self.results_ticket
    }

    /// Query that produced [`Self::results`].
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Every result of the last query, ranked.
    pub fn results(&self) -> &[ScoredResult] {
        &self.results
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Drops the current results and any pending query.
    ///
    /// The cache is emptied as well once it holds more than the configured
    /// clear threshold.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.query.clear();
        self.results = Arc::from(Vec::<ScoredResult>::new());
        self.results_ticket = None;
        self.shown = 0;

        if self.cache.len() > self.cache_clear_threshold {
            self.cache.clear();
        }
    }
}

/// Pagination.
impl SearchSession {
    /// Reveals the next page and returns it. Empty once everything is shown.
    pub fn next_page(&mut self) -> &[ScoredResult] {
        let start = self.shown;
        let end = (start + self.page_size).min(self.results.len());
        self.shown = end;
        &self.results[start..end]
    }

    /// Results revealed so far.
    pub fn visible(&self) -> &[ScoredResult] {
        &self.results[..self.shown]
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn remaining(&self) -> usize {
        self.results.len() - self.shown
    }

    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }
}
