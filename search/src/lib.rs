//! Lexis dictionary search library.
//!
//! Ranked, case-insensitive word search over a [`lexis_core::EntryStore`].
//!
//! # Design
//!
//! - [`matcher`] scores one candidate against a query in tiers:
//!   exact, substring, subsequence, then edit distance.
//! - [`SearchEngine`] runs a cheap prefix/substring scan first and falls back
//!   to full matcher scoring only when the scan found little. Scan limits
//!   bound the worst-case latency at the cost of completeness.
//! - [`ResultCache`] keeps recent query results with FIFO eviction.
//! - [`SearchSession`] holds per-view state (query, cache, pagination). It is
//!   owned by the caller; the library keeps no global state.
//!
//! # Non-blocking API
//!
//! - `SearchSession::set_query()`: records the query
//! - `SearchSession::tick()`: runs the latest query
//! - `SearchSession::next_page()`: reveals the next page of results

mod cache;
mod config;
mod dictionary;
mod engine;
pub mod matcher;
mod results;
mod session;

pub use cache::ResultCache;
pub use config::{ConfigError, SearchConfig};
pub use dictionary::Dictionary;
pub use engine::SearchEngine;
pub use results::{MatchType, ScoredResult};
pub use session::{QueryTicket, SearchSession};
