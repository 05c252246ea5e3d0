use index::{CatalogEntry, Record};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which call site issued a ranking request; reported to [`MatchMetrics`](crate::MatchMetrics).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Incremental typeahead suggestions.
    Suggest,
    /// Explicit submit-style search.
    Search,
    /// Direct call with a caller-supplied limit.
    Direct,
}

/// Result limits for the two query entry points.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded in
/// higher-level configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Maximum entries returned by [`Matcher::suggest`](crate::Matcher::suggest).
    #[serde(default = "MatchConfig::default_suggest_limit")]
    pub suggest_limit: usize,
    /// Maximum entries returned by [`Matcher::search`](crate::Matcher::search).
    #[serde(default = "MatchConfig::default_search_limit")]
    pub search_limit: usize,
}

impl MatchConfig {
    pub(crate) fn default_suggest_limit() -> usize {
        8
    }

    pub(crate) fn default_search_limit() -> usize {
        5
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.suggest_limit == 0 {
            return Err(MatchError::InvalidConfig(
                "suggest_limit must be greater than zero".into(),
            ));
        }
        if self.search_limit == 0 {
            return Err(MatchError::InvalidConfig(
                "search_limit must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            suggest_limit: Self::default_suggest_limit(),
            search_limit: Self::default_search_limit(),
        }
    }
}

/// A catalog entry with a non-zero relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub entry: &'a CatalogEntry,
    pub score: u32,
}

impl<'a> ScoredCandidate<'a> {
    pub fn record(&self) -> &'a Record {
        self.entry.record()
    }
}

/// A chosen record expanded to every term held by the same person.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// Earliest term; the entry shown first.
    pub primary: &'a Record,
    /// All terms, ascending by mandate start.
    pub mandates: Vec<&'a Record>,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
