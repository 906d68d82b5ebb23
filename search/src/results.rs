//! Search result types.

use lexis_core::{Definition, Entry, Word};
use serde::{Deserialize, Serialize};

/// Which field of an entry produced the match.
///
/// Only words are scored; definitions are never searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    #[default]
    Word,
}

/// A ranked hit, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub word: Word,
    pub definition: Definition,
    /// 0..=100, higher is better.
    pub score: u8,
    pub match_type: MatchType,
}

impl ScoredResult {
    pub(crate) fn from_entry(entry: &Entry, score: u8) -> Self {
        Self {
            word: entry.word().clone(),
            definition: entry.definition().clone(),
            score,
            match_type: MatchType::Word,
        }
    }
}
