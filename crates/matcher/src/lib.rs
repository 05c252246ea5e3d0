//! # PresiDATA Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the catalog (`index`). It turns free-text queries
//! into canonical form, scores every catalog entry with an additive set of
//! named rules, ranks the survivors, and groups records that belong to the
//! same person into chronologically ordered mandates.
//!
//! ## Core Types
//!
//! - [`Matcher`]: shared handle over an immutable [`index::Catalog`].
//! - [`Query`]: normalized query text plus its tokens.
//! - [`ScoredCandidate`]: catalog entry + non-zero score.
//! - [`Selection`]: primary record + every mandate of that person.
//! - [`MatchConfig`]: limits for suggestions (8) and searches (5).
//! - [`SCORING_RULES`] / [`ScoreBreakdown`]: the rule list and its per-rule
//!   explanation.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use index::{Catalog, Record};
//! use matcher::Matcher;
//!
//! let catalog = Catalog::new(vec![
//!     Record::new("vargas-2", "Getúlio Vargas").with_mandate("31/01/1951", "24/08/1954"),
//!     Record::new("vargas-1", "Getúlio Vargas").with_mandate("03/11/1930", "29/10/1945"),
//!     Record::new("dutra", "Eurico Gaspar Dutra").with_mandate("31/01/1946", "31/01/1951"),
//! ]);
//! let matcher = Matcher::new(Arc::new(catalog));
//!
//! let hits = matcher.suggest("getulio");
//! assert_eq!(hits.len(), 2);
//!
//! let selection = matcher.resolve("vargas").unwrap();
//! assert_eq!(selection.primary.id, "vargas-1");
//! assert_eq!(selection.mandates.len(), 2);
//! ```
//!
//! ## Observability
//!
//! Ranking emits a `match_query` debug event inside a
//! `matcher.find_best_matches` span. Install a [`MatchMetrics`] implementation
//! via [`set_match_metrics`] to receive per-request latency and hit counts.

pub mod engine;
pub mod levenshtein;
pub mod metrics;
pub mod rules;
pub mod types;

pub use crate::engine::{group_mandates, rank_catalog, rank_query, select_mandates, Matcher};
pub use crate::levenshtein::levenshtein;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::rules::{
    explain, score, token_scores, Query, RuleContribution, RuleInput, ScoreBreakdown, ScoringRule,
    SCORING_RULES,
};
pub use crate::types::{MatchConfig, MatchError, QueryKind, ScoredCandidate, Selection};
