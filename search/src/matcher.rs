//! Scoring of a single candidate word against a query.
//!
//! Matching is case-insensitive and tiered. The first tier that applies
//! decides the score; tiers are never blended:
//!
//! 1. exact equality: [`EXACT_SCORE`]
//! 2. candidate contains the query: [`CONTAINS_SCORE`]
//! 3. length gate: lengths differ by more than the query length, score 0
//! 4. query is a subsequence of the candidate: [`SUBSEQUENCE_SCORE`]
//! 5. Levenshtein similarity (`strsim`), only for queries up to
//!    [`EDIT_DISTANCE_MAX_QUERY_CHARS`] characters, kept when above
//!    [`MIN_SIMILARITY`]
//!
//! Lengths count `char`s, not bytes.

pub const EXACT_SCORE: u8 = 100;
/// Assigned by the search engine's fast scan, not by [`score`].
pub const PREFIX_SCORE: u8 = 90;
pub const CONTAINS_SCORE: u8 = 80;
pub const SUBSEQUENCE_SCORE: u8 = 60;

pub const EDIT_DISTANCE_MAX_QUERY_CHARS: usize = 8;
pub const MIN_SIMILARITY: f64 = 40.0;

/// Scores `candidate` against `query` in `0..=100`. An empty query scores 0.
pub fn score(candidate: &str, query: &str) -> u8 {
    score_folded(&candidate.to_lowercase(), &query.to_lowercase())
}

/// [`score`] for inputs that are already lowercased.
pub(crate) fn score_folded(candidate: &str, query: &str) -> u8 {
    if query.is_empty() {
        return 0;
    }
    if candidate == query {
        return EXACT_SCORE;
    }
    if candidate.contains(query) {
        return CONTAINS_SCORE;
    }

    let candidate_chars: Vec<char> = candidate.chars().collect();
    let query_chars: Vec<char> = query.chars().collect();
    let (candidate_len, query_len) = (candidate_chars.len(), query_chars.len());

    if candidate_len.abs_diff(query_len) > query_len {
        return 0;
    }
    if is_subsequence(&candidate_chars, &query_chars) {
        return SUBSEQUENCE_SCORE;
    }
    if query_len > EDIT_DISTANCE_MAX_QUERY_CHARS {
        return 0;
    }

    let max_len = candidate_len.max(query_len);
    let distance = strsim::levenshtein(candidate, query);
    let similarity = (max_len.saturating_sub(distance) * 100) as f64 / max_len as f64;
    if similarity > MIN_SIMILARITY {
        similarity.round() as u8
    } else {
        0
    }
}

/// Whether every char of `query` appears in `candidate` in order.
pub fn is_subsequence(candidate: &[char], query: &[char]) -> bool {
    let mut remaining = query.iter().peekable();
    for c in candidate {
        if remaining.peek() == Some(&c) {
            remaining.next();
        }
    }
    remaining.peek().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_exact_scores_100() {
        for word in ["hello", "a", "Straße"] {
            assert_eq!(score(word, word), EXACT_SCORE);
        }
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(score("hello", ""), 0);
        assert_eq!(score("", ""), 0);
    }

    #[test]
    fn test_tier_ordering() {
        let exact = score("hello", "hello");
        let contains = score("hello", "ell");
        let subsequence = score("hello", "hlo");

        assert_eq!(exact, 100);
        assert_eq!(contains, 80);
        assert_eq!(subsequence, 60);
        assert!(exact > contains && contains > subsequence);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("HeLLo", "hello"), EXACT_SCORE);
        assert_eq!(score("hello", "ELL"), CONTAINS_SCORE);
    }

    #[test]
    fn test_length_gate_runs_after_contains() {
        // "a" is contained even though the lengths differ a lot.
        assert_eq!(score("extraordinarily", "a"), CONTAINS_SCORE);
        // Not contained, and 15 - 2 > 2.
        assert_eq!(score("extraordinarily", "ey"), 0);
    }

    #[test]
    fn test_edit_distance_above_threshold() {
        // kitten -> sitten: one substitution, similarity 5/6.
        assert_eq!(score("kitten", "sitten"), 83);
        // helo vs hola: distance 2 over 4, exactly 50.
        assert_eq!(score("hola", "helo"), 50);
    }

    #[test]
    fn test_edit_distance_counts_chars() {
        // One substitution over four chars, even though "é" is two bytes.
        assert_eq!(score("café", "cafe"), 75);
    }

    #[test]
    fn test_edit_distance_at_threshold_is_rejected() {
        // distance 3 over 5: similarity 40, not above it.
        assert_eq!(score("abcde", "xyzde"), 0);
    }

    #[test]
    fn test_edit_distance_skipped_for_long_queries() {
        // 9 chars, one substitution, not a subsequence.
        assert_eq!(score("abcdefghi", "abcdefghx"), 0);
        // Same shape at 8 chars is scored.
        assert_eq!(score("abcdefgh", "abcdefgx"), 88);
    }

    #[test]
    fn test_subsequence() {
        assert!(is_subsequence(&chars("hello"), &chars("hlo")));
        assert!(is_subsequence(&chars("hello"), &chars("")));
        assert!(!is_subsequence(&chars("hello"), &chars("olh")));
        assert!(!is_subsequence(&chars("hel"), &chars("hell")));
    }
}
