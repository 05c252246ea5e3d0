//! Workspace umbrella crate for the PresiDATA search core.
//!
//! This crate stitches together text normalization (`canonical`), the record
//! catalog (`index`) and ranking/grouping (`matcher`) so callers can load a
//! catalog once and query it through a single API entry point.
//!
//! ```
//! let handle = presidata::load_catalog_json(
//!     r#"{"presidentes": [
//!         {"id": 1, "nome": "Getúlio Vargas", "inicio_mandato": "31/01/1951"},
//!         {"id": 2, "nome": "Getúlio Vargas", "inicio_mandato": "03/11/1930"}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! let hits = presidata::suggest(&handle, "getulio");
//! assert_eq!(hits.len(), 2);
//!
//! let selection = presidata::resolve(&handle, "vargas").unwrap();
//! assert_eq!(selection.primary.id, "2");
//! ```

pub mod config;

pub use canonical::{collapse_whitespace, fold_diacritics, normalize, normalize_opt, tokenize};
pub use config::{ConfigLoadError, PresidataConfig};
pub use index::{
    Catalog, CatalogEntry, CatalogError, Party, Record, SENTINEL_DATE, SearchMeta, build_meta,
    parse_mandate_date,
};
pub use matcher::{
    MatchConfig, MatchError, MatchMetrics, Matcher, Query, QueryKind, ScoreBreakdown,
    ScoredCandidate, Selection, explain, levenshtein, score, set_match_metrics,
};

use std::sync::Arc;

use tracing::info;

/// Shared, immutable catalog. Clone it into as many threads as needed.
pub type CatalogHandle = Arc<Catalog>;

/// Builds a catalog from records, preserving their order.
pub fn load_catalog<I>(records: I) -> CatalogHandle
where
    I: IntoIterator<Item = Record>,
{
    Arc::new(Catalog::new(records))
}

/// Decodes a JSON catalog document and builds it.
pub fn load_catalog_json(json: &str) -> Result<CatalogHandle, CatalogError> {
    Catalog::from_json_str(json).map(Arc::new)
}

/// Typeahead suggestions with the default limit (8).
pub fn suggest<'a>(handle: &'a CatalogHandle, query: &str) -> Vec<ScoredCandidate<'a>> {
    let limit = MatchConfig::default().suggest_limit;
    matcher::rank_query(handle, query, limit, QueryKind::Suggest)
}

/// Submit-style search with the default limit (5).
pub fn search<'a>(handle: &'a CatalogHandle, query: &str) -> Vec<ScoredCandidate<'a>> {
    let limit = MatchConfig::default().search_limit;
    matcher::rank_query(handle, query, limit, QueryKind::Search)
}

/// Every mandate of the person `record` names, earliest first.
pub fn group_by_record<'a>(handle: &'a CatalogHandle, record: &Record) -> Vec<&'a Record> {
    matcher::group_mandates(handle, record)
}

/// Searches and expands the top hit into its mandate group.
pub fn resolve<'a>(handle: &'a CatalogHandle, query: &str) -> Option<Selection<'a>> {
    let top = search(handle, query).into_iter().next()?;
    Some(matcher::select_mandates(handle, top.record()))
}

/// Builds a [`Matcher`] over `handle` with the limits from a loaded config.
pub fn matcher_from_config(
    handle: CatalogHandle,
    config: &PresidataConfig,
) -> Result<Matcher, MatchError> {
    let match_config = config.match_config();
    let matcher = Matcher::with_config(handle, match_config)?;
    info!(
        config_name = config.name.as_deref().unwrap_or("default"),
        suggest_limit = matcher.config().suggest_limit,
        search_limit = matcher.config().search_limit,
        "matcher_configured"
    );
    Ok(matcher)
}
