use std::sync::Arc;
use std::time::Instant;

use canonical::normalize;
use index::{Catalog, CatalogEntry, Record};
use tracing::{debug, Level};

use crate::metrics::metrics_recorder;
use crate::rules::{explain, score, Query, ScoreBreakdown};
use crate::types::{MatchConfig, MatchError, QueryKind, ScoredCandidate, Selection};


/// Ranks catalog entries against free-text queries and groups mandates.
///
/// Holds a shared, immutable [`Catalog`]; a `Matcher` is `Send + Sync` and can
/// be cloned cheaply into as many threads as needed.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
    config: MatchConfig,
}

impl Matcher {
    /// Matcher with the default limits (8 suggestions, 5 search results).
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            config: MatchConfig::default(),
        }
    }

    /// Matcher with explicit limits; rejects an invalid [`MatchConfig`].
    pub fn with_config(catalog: Arc<Catalog>, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Scores every entry, drops zero scores, sorts descending (ties keep
    /// catalog order) and keeps at most `limit` entries.
    ///
    /// A query with nothing searchable in it returns an empty list.
    pub fn find_best_matches(&self, query: &str, limit: usize) -> Vec<ScoredCandidate<'_>> {
        self.ranked(query, limit, QueryKind::Direct)
    }

    /// Typeahead suggestions, capped at `suggest_limit`.
    pub fn suggest(&self, query: &str) -> Vec<ScoredCandidate<'_>> {
        self.ranked(query, self.config.suggest_limit, QueryKind::Suggest)
    }

    /// Submit-style search, capped at `search_limit`. Callers usually take
    /// only the first entry.
    pub fn search(&self, query: &str) -> Vec<ScoredCandidate<'_>> {
        self.ranked(query, self.config.search_limit, QueryKind::Search)
    }

    /// Per-rule score breakdown of `entry` for `query`, or `None` when the
    /// query has nothing searchable in it.
    pub fn explain(&self, query: &str, entry: &CatalogEntry) -> Option<ScoreBreakdown> {
        Query::parse(query).map(|q| explain(entry.meta(), &q))
    }

    /// Every catalog record sharing `record`'s canonical name, ascending by
    /// mandate start. Records with unparseable dates come first; equal dates
    /// keep catalog order.
    pub fn group_by_record(&self, record: &Record) -> Vec<&Record> {
        group_mandates(&self.catalog, record)
    }

    /// Expands a chosen record into its mandate group. The primary entry is
    /// the earliest term, or `record` itself when the catalog holds no record
    /// with that name.
    pub fn select<'a>(&'a self, record: &'a Record) -> Selection<'a> {
        select_mandates(&self.catalog, record)
    }

    /// Runs [`Matcher::search`] and selects the top hit.
    pub fn resolve(&self, query: &str) -> Option<Selection<'_>> {
        let top = self.search(query).into_iter().next()?;
        Some(self.select(top.record()))
    }

    fn ranked(&self, query: &str, limit: usize, kind: QueryKind) -> Vec<ScoredCandidate<'_>> {
        rank_query(&self.catalog, query, limit, kind)
    }
}

/// Normalizes `query`, ranks the catalog against it and reports the request
/// to the installed [`MatchMetrics`](crate::MatchMetrics) recorder.
pub fn rank_query<'a>(
    catalog: &'a Catalog,
    query: &str,
    limit: usize,
    kind: QueryKind,
) -> Vec<ScoredCandidate<'a>> {
    let start = Instant::now();
    let span = tracing::span!(Level::DEBUG, "matcher.find_best_matches", kind = ?kind, limit);
    let _guard = span.enter();

    let parsed = Query::parse(query);
    let hits = match &parsed {
        Some(q) => rank_catalog(catalog, q, limit),
        None => Vec::new(),
    };

    let latency = start.elapsed();
    debug!(
        query_len = query.len(),
        query_tokens = parsed.as_ref().map_or(0, |q| q.tokens().len()),
        hits = hits.len(),
        elapsed_micros = latency.as_micros(),
        "match_query"
    );
    if let Some(recorder) = metrics_recorder() {
        recorder.record_match(kind, latency, hits.len());
    }

    hits
}

/// Records in `catalog` sharing `record`'s canonical name, ascending by
/// mandate start. Unparseable dates sort first; equal dates keep catalog
/// order.
pub fn group_mandates<'a>(catalog: &'a Catalog, record: &Record) -> Vec<&'a Record> {
    let name = normalize(&record.name);
    let mut group: Vec<&CatalogEntry> = catalog
        .iter()
        .filter(|entry| entry.meta().full_name == name)
        .collect();
    group.sort_by_cached_key(|entry| entry.record().mandate_start_date());
    group.into_iter().map(CatalogEntry::record).collect()
}

/// Mandate group of `record` plus its primary entry.
pub fn select_mandates<'a>(catalog: &'a Catalog, record: &'a Record) -> Selection<'a> {
    let mandates = group_mandates(catalog, record);
    let primary = mandates.first().copied().unwrap_or(record);
    Selection { primary, mandates }
}

/// Scores and ranks every catalog entry for an already-parsed query.
pub fn rank_catalog<'a>(catalog: &'a Catalog, query: &Query, limit: usize) -> Vec<ScoredCandidate<'a>> {
    if limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<ScoredCandidate<'a>> = catalog
        .iter()
        .filter_map(|entry| {
            let score = score(entry.meta(), query);
            (score > 0).then_some(ScoredCandidate { entry, score })
        })
        .collect();

    // Stable sort: equal scores stay in catalog order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);
    hits
}
