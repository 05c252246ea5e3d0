//! Raw officeholder records as supplied by the catalog loader.
//!
//! Only `id`, `name`, `party` and the mandate dates matter to search; every
//! other field (photo, economic indicators, biography lists) is kept verbatim
//! in [`Record::extra`] for display layers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::mandate::parse_mandate_date;
use chrono::NaiveDate;

/// Party affiliation: absent, a single label, or an ordered list of labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Party {
    Single(String),
    List(Vec<String>),
}

impl Party {
    /// Joins every label with `sep`. A single label is returned as-is.
    pub fn joined(&self, sep: &str) -> String {
        match self {
            Party::Single(label) => label.clone(),
            Party::List(labels) => labels.join(sep),
        }
    }
}

/// One officeholder term as stored in the catalog.
///
/// A person with several non-contiguous terms appears as several records
/// sharing the same name. The original dataset's Portuguese keys (`nome`,
/// `partido`, `inicio_mandato`, `final_mandato`) are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier. Numeric JSON ids are stringified.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(alias = "nome", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(alias = "partido", default, skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,
    /// Start of the term, expected as `DD/MM/YYYY`.
    #[serde(
        alias = "inicio_mandato",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mandate_start: Option<String>,
    #[serde(
        alias = "final_mandato",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mandate_end: Option<String>,
    /// Display-only fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Record {
    /// Minimal constructor used by loaders and tests; display fields start empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            party: None,
            mandate_start: None,
            mandate_end: None,
            extra: Map::new(),
        }
    }

    pub fn with_party(mut self, party: Party) -> Self {
        self.party = Some(party);
        self
    }

    pub fn with_mandate(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.mandate_start = Some(start.into());
        self.mandate_end = Some(end.into());
        self
    }

    /// Party labels joined by a single space, or `""` when absent.
    pub fn party_text(&self) -> String {
        self.party
            .as_ref()
            .map(|party| party.joined(" "))
            .unwrap_or_default()
    }

    /// Parsed mandate start; malformed or missing values give
    /// [`SENTINEL_DATE`](crate::SENTINEL_DATE).
    pub fn mandate_start_date(&self) -> NaiveDate {
        parse_mandate_date(self.mandate_start.as_deref())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_portuguese_keys_and_keeps_extras() {
        let value = json!({
            "id": "getulio-vargas-1",
            "nome": "Getúlio Vargas",
            "partido": ["PTB", "PSD"],
            "inicio_mandato": "31/01/1951",
            "final_mandato": "24/08/1954",
            "foto": "img/vargas.jpg",
            "aprovacao": "--"
        });
        let record: Record = serde_json::from_value(value).expect("record decodes");

        assert_eq!(record.id, "getulio-vargas-1");
        assert_eq!(record.name, "Getúlio Vargas");
        assert_eq!(
            record.party,
            Some(Party::List(vec!["PTB".into(), "PSD".into()]))
        );
        assert_eq!(record.mandate_start.as_deref(), Some("31/01/1951"));
        assert_eq!(record.mandate_end.as_deref(), Some("24/08/1954"));
        assert_eq!(record.extra.get("foto"), Some(&json!("img/vargas.jpg")));
        assert_eq!(record.extra.len(), 2);
    }

    #[test]
    fn missing_and_null_fields_default_to_empty() {
        let record: Record =
            serde_json::from_value(json!({ "id": 7, "name": null, "partido": null }))
                .expect("record decodes");

        assert_eq!(record.id, "7");
        assert_eq!(record.name, "");
        assert!(record.party.is_none());
        assert!(record.mandate_start.is_none());
        assert_eq!(record.party_text(), "");
    }

    #[test]
    fn single_party_label_is_accepted() {
        let record: Record =
            serde_json::from_value(json!({ "id": "a", "name": "A", "party": "PT/PL" }))
                .expect("record decodes");
        assert_eq!(record.party_text(), "PT/PL");
    }

    #[test]
    fn list_party_joins_with_space() {
        let record = Record::new("jk", "Juscelino Kubitschek")
            .with_party(Party::List(vec!["PSD".into(), "PTB".into()]));
        assert_eq!(record.party_text(), "PSD PTB");
    }

    #[test]
    fn non_string_mandate_is_kept_for_sentinel_parsing() {
        let record: Record =
            serde_json::from_value(json!({ "id": "x", "name": "X", "inicio_mandato": 1930 }))
                .expect("record decodes");
        assert_eq!(record.mandate_start.as_deref(), Some("1930"));
        assert_eq!(record.mandate_start_date(), crate::SENTINEL_DATE);
    }
}
