use std::collections::HashSet;

use canonical::{normalize, tokenize};
use serde::Serialize;

use crate::record::Record;

/// Search-side view of a [`Record`], derived once when the catalog is built.
///
/// `SearchMeta` is a pure function of its record: [`build_meta`] on the same
/// record always yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMeta {
    /// Canonical form of the record name.
    pub full_name: String,
    /// Name tokens in order, then id tokens, duplicates removed by first
    /// occurrence. Index 0 is always the first name token when the name is
    /// non-empty; the first-token bonus in the scorer relies on that.
    pub tokens: Vec<String>,
    /// Canonical party text (list labels joined by a space).
    pub party: String,
    pub party_tokens: Vec<String>,
}

/// Derives the [`SearchMeta`] for one record.
pub fn build_meta(record: &Record) -> SearchMeta {
    let full_name = normalize(&record.name);
    let id_text = normalize(&record.id);

    let mut seen: HashSet<String> = HashSet::new();
    let tokens: Vec<String> = tokenize(&full_name)
        .into_iter()
        .chain(tokenize(&id_text))
        .filter(|token| seen.insert(token.clone()))
        .collect();

    let party = normalize(&record.party_text());
    let party_tokens = tokenize(&party);

    SearchMeta {
        full_name,
        tokens,
        party,
        party_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Party;

    #[test]
    fn name_tokens_precede_id_tokens() {
        let record = Record::new("getulio-vargas-2", "Getúlio Vargas");
        let meta = build_meta(&record);

        assert_eq!(meta.full_name, "getulio vargas");
        assert_eq!(meta.tokens, vec!["getulio", "vargas", "2"]);
        assert_eq!(meta.tokens[0], "getulio");
    }

    #[test]
    fn duplicates_removed_by_first_occurrence() {
        let record = Record::new("lula lula-da-silva", "Lula da Silva Lula");
        let meta = build_meta(&record);
        assert_eq!(meta.tokens, vec!["lula", "da", "silva"]);
    }

    #[test]
    fn party_list_is_joined_then_normalized() {
        let record = Record::new("jk", "Juscelino Kubitschek")
            .with_party(Party::List(vec!["PSD".into(), "PTB/PR".into()]));
        let meta = build_meta(&record);

        assert_eq!(meta.party, "psd ptb pr");
        assert_eq!(meta.party_tokens, vec!["psd", "ptb", "pr"]);
    }

    #[test]
    fn missing_party_is_empty() {
        let meta = build_meta(&Record::new("x", "Deodoro da Fonseca"));
        assert_eq!(meta.party, "");
        assert!(meta.party_tokens.is_empty());
    }

    #[test]
    fn empty_name_leaves_only_id_tokens() {
        let meta = build_meta(&Record::new("Nilo 1909", ""));
        assert_eq!(meta.full_name, "");
        assert_eq!(meta.tokens, vec!["nilo", "1909"]);
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let record = Record::new("fhc-1", "Fernando Henrique Cardoso")
            .with_party(Party::Single("PSDB".into()));
        assert_eq!(build_meta(&record), build_meta(&record.clone()));
    }
}
