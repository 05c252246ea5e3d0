use std::time::Instant;

use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::error::CatalogError;
use crate::meta::{build_meta, SearchMeta};
use crate::record::Record;

/// Keys under which a wrapped catalog document may carry its record array.
const RECORD_KEYS: [&str; 2] = ["records", "presidentes"];

/// A record paired with its precomputed [`SearchMeta`] and catalog position.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    position: usize,
    record: Record,
    meta: SearchMeta,
}

impl CatalogEntry {
    /// Zero-based load order; the ranking tie-break key.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn meta(&self) -> &SearchMeta {
        &self.meta
    }
}

/// Immutable, ordered set of officeholder records.
///
/// Metadata is built exactly once per record in [`Catalog::new`]. There is no
/// mutation API, so a catalog shared behind an `Arc` can be read from any
/// number of threads without locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, deriving search metadata for every record in order.
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let start = Instant::now();
        let entries: Vec<CatalogEntry> = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let meta = build_meta(&record);
                CatalogEntry {
                    position,
                    record,
                    meta,
                }
            })
            .collect();

        info!(
            records = entries.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "catalog_built"
        );

        Self { entries }
    }

    /// Decodes a catalog document and builds it.
    ///
    /// Accepts a bare array of records, or an object carrying the array under
    /// `records` or `presidentes`. An object with neither key is an empty
    /// catalog.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: JsonValue = serde_json::from_str(json).map_err(|err| {
            warn!(error = %err, "catalog_parse_failure");
            CatalogError::Parse(err)
        })?;
        Self::from_json_value(document)
    }

    /// Same as [`Catalog::from_json_str`] for an already-parsed document.
    pub fn from_json_value(document: JsonValue) -> Result<Self, CatalogError> {
        let records = match document {
            JsonValue::Array(records) => JsonValue::Array(records),
            JsonValue::Object(mut map) => {
                match RECORD_KEYS.iter().find_map(|key| map.remove(*key)) {
                    Some(records) => records,
                    None => {
                        warn!("catalog_missing_records");
                        return Ok(Self::default());
                    }
                }
            }
            other => return Err(CatalogError::UnexpectedShape(json_kind(&other))),
        };

        let records: Vec<Record> = serde_json::from_value(records).map_err(|err| {
            warn!(error = %err, "catalog_parse_failure");
            CatalogError::Parse(err)
        })?;
        Ok(Self::new(records))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a load position.
    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    /// First entry whose record id equals `id` exactly.
    pub fn get_by_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.record.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
