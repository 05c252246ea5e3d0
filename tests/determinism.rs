use presidata::{Record, load_catalog, load_catalog_json, normalize, resolve, suggest};

const CATALOG_JSON: &str = r#"{
  "presidentes": [
    {"id": 1, "nome": "Deodoro da Fonseca", "partido": "Militar", "inicio_mandato": "15/11/1889", "final_mandato": "23/11/1891"},
    {"id": 14, "nome": "Getúlio Vargas", "partido": "Aliança Liberal", "inicio_mandato": "03/11/1930", "final_mandato": "29/10/1945"},
    {"id": 16, "nome": "Eurico Gaspar Dutra", "partido": "PSD", "inicio_mandato": "31/01/1946", "final_mandato": "31/01/1951"},
    {"id": 17, "nome": "Getúlio Vargas", "partido": "PTB", "inicio_mandato": "31/01/1951", "final_mandato": "24/08/1954"},
    {"id": 35, "nome": "Luiz Inácio Lula da Silva", "partido": ["PT"], "inicio_mandato": "01/01/2003", "final_mandato": "01/01/2011"}
  ]
}"#;

fn snapshot(query: &str) -> Vec<(String, u32)> {
    let handle = load_catalog_json(CATALOG_JSON).expect("catalog parses");
    suggest(&handle, query)
        .iter()
        .map(|hit| (hit.record().id.clone(), hit.score))
        .collect()
}

#[test]
fn repeated_loads_rank_identically() {
    for query in ["vargas", "getulio", "lula", "pt", "gaspar dutra", "fonseka"] {
        let first = snapshot(query);
        for _ in 0..5 {
            assert_eq!(snapshot(query), first, "{query:?}");
        }
    }
}

#[test]
fn equivalent_queries_rank_identically() {
    let handle = load_catalog_json(CATALOG_JSON).expect("catalog parses");
    let ids = |query: &str| -> Vec<String> {
        suggest(&handle, query)
            .iter()
            .map(|hit| format!("{}:{}", hit.record().id, hit.score))
            .collect()
    };

    assert_eq!(ids("Getúlio   VARGAS"), ids("getulio vargas"));
    assert_eq!(ids("  luiz inácio!  "), ids("luiz inacio"));
}

#[test]
fn numeric_ids_and_party_lists_are_accepted() {
    let handle = load_catalog_json(CATALOG_JSON).expect("catalog parses");
    assert_eq!(handle.len(), 5);

    let lula = handle.get_by_id("35").expect("record by id");
    assert_eq!(lula.record().party_text(), "PT");
    assert_eq!(lula.meta().party_tokens, ["pt"]);
}

#[test]
fn resolve_picks_earliest_mandate() {
    let handle = load_catalog_json(CATALOG_JSON).expect("catalog parses");
    let selection = resolve(&handle, "getulio").expect("match");

    assert_eq!(selection.primary.id, "14");
    let ids: Vec<&str> = selection.mandates.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["14", "17"]);
}

#[test]
fn record_order_defines_ties_not_input_hashing() {
    let names = ["Campos Sales", "Prudente de Morais", "Campos Sales"];
    let handle = load_catalog(
        names
            .iter()
            .enumerate()
            .map(|(n, name)| Record::new(n.to_string(), *name)),
    );
    let hits = suggest(&handle, &normalize("Campos Sales"));
    let ids: Vec<&str> = hits.iter().map(|hit| hit.record().id.as_str()).collect();
    assert_eq!(&ids[..2], ["0", "2"]);
}
