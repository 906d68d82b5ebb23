use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search limits and session settings, serializable as TOML.
///
/// The scan limits trade completeness for bounded latency: once
/// `fast_match_limit` prefix/substring hits are found the scan stops, so
/// lower-ranked hits further down the dataset are never seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results returned by a search.
    pub result_limit: usize,
    /// Prefix/substring hits after which the scan stops.
    pub fast_match_limit: usize,
    /// Maximum number of candidates kept for full fuzzy scoring.
    pub fuzzy_pool_limit: usize,
    /// Fuzzy scoring runs only when fewer results than this were found.
    pub fuzzy_trigger_below: usize,
    /// Shorter queries never reach fuzzy scoring.
    pub fuzzy_min_query_chars: usize,
    pub cache_capacity: usize,
    /// Clearing a search also empties the cache once it holds more than this.
    pub cache_clear_threshold: usize,
    pub page_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: 1000,
            fast_match_limit: 500,
            fuzzy_pool_limit: 500,
            fuzzy_trigger_below: 50,
            fuzzy_min_query_chars: 3,
            cache_capacity: 100,
            cache_clear_threshold: 50,
            page_size: 50,
        }
    }
}

impl SearchConfig {
    /// Parses a TOML document. Missing fields take their default value.
    ///
    /// Reading the document is left to the caller.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Returns the list of problems with this config, empty if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.result_limit == 0 {
            errors.push("result_limit must be at least 1".to_string());
        }
        if self.fast_match_limit == 0 {
            errors.push("fast_match_limit must be at least 1".to_string());
        }
        if self.fuzzy_min_query_chars == 0 {
            errors.push("fuzzy_min_query_chars must be at least 1".to_string());
        }
        if self.page_size == 0 {
            errors.push("page_size must be at least 1".to_string());
        }
        if self.cache_clear_threshold > self.cache_capacity {
            errors.push(format!(
                "cache_clear_threshold ({}) exceeds cache_capacity ({})",
                self.cache_clear_threshold, self.cache_capacity
            ));
        }

        errors
    }

    /// Returns a config with invalid values replaced by defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let or_default = |value: usize, default: usize| if value == 0 { default } else { value };

        Self {
            result_limit: or_default(self.result_limit, defaults.result_limit),
            fast_match_limit: or_default(self.fast_match_limit, defaults.fast_match_limit),
            fuzzy_pool_limit: self.fuzzy_pool_limit,
            fuzzy_trigger_below: self.fuzzy_trigger_below,
            fuzzy_min_query_chars: or_default(
                self.fuzzy_min_query_chars,
                defaults.fuzzy_min_query_chars,
            ),
            cache_capacity: self.cache_capacity,
            cache_clear_threshold: self.cache_clear_threshold.min(self.cache_capacity),
            page_size: or_default(self.page_size, defaults.page_size),
        }
    }
}

/// Errors that can occur when parsing or rendering config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
