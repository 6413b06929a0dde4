use std::collections::BTreeSet;

use proptest::prelude::*;

use jobstore::{
    core::store::{RecordStore, StoreError},
    record::Record,
    source::memory::MemorySource,
};

const FIELDS: [&str; 3] = ["title", "employer", "location"];

fn cell_strategy() -> impl Strategy<Value = String> {
    // small alphabet with mixed case so substring hits are common
    "[aAbBcC ]{0,6}"
}

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(cell_strategy(), 3), 0..40)
}

fn store_from(rows: &[Vec<String>]) -> RecordStore {
    let mut source = MemorySource::new(FIELDS);
    for row in rows {
        source.push_row(row.iter().cloned());
    }
    RecordStore::new(source)
}

fn model_row_matches(cell: &str, term: &str) -> bool {
    cell.to_lowercase().contains(&term.to_lowercase())
}

fn model_record(row: &[String]) -> Record {
    FIELDS.iter().copied().zip(row.iter().cloned()).collect()
}

proptest! {
    #[test]
    fn distinct_values_match_sorted_set(rows in rows_strategy(), col in 0usize..3) {
        let store = store_from(&rows);
        let field = FIELDS[col];

        let expected: Vec<String> = rows
            .iter()
            .map(|r| r[col].clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let got = store.distinct_values(field).expect("known field");
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn column_search_equals_filtered_scan(
        rows in rows_strategy(),
        col in 0usize..3,
        term in "[abcABC]{0,3}",
    ) {
        let store = store_from(&rows);
        let field = FIELDS[col];

        let expected: Vec<Record> = rows
            .iter()
            .filter(|r| model_row_matches(&r[col], &term))
            .map(|r| model_record(r))
            .collect();

        let got = store.find_by_column_and_value_cloned(field, &term).expect("known field");
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn value_search_equals_any_field_scan(rows in rows_strategy(), term in "[abcABC ]{0,3}") {
        let store = store_from(&rows);

        let expected: Vec<Record> = rows
            .iter()
            .filter(|r| r.iter().any(|cell| model_row_matches(cell, &term)))
            .map(|r| model_record(r))
            .collect();

        let got = store.find_by_value_cloned(&term);
        prop_assert_eq!(got.len(), expected.len());
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn empty_term_returns_everything_in_order(rows in rows_strategy()) {
        let store = store_from(&rows);
        let all = store.all_records();

        prop_assert_eq!(store.find_by_value_cloned(""), all.clone());
        for field in FIELDS {
            prop_assert_eq!(store.find_by_column_and_value_cloned(field, "").expect("known field"), all.clone());
        }
    }

    #[test]
    fn unknown_fields_are_rejected(rows in rows_strategy(), name in "[x-z]{1,5}") {
        let store = store_from(&rows);

        prop_assert_eq!(store.distinct_values(&name), Err(StoreError::UnknownField(name.clone())));
        prop_assert_eq!(
            store.find_by_column_and_value(&name, "a"),
            Err(StoreError::UnknownField(name.clone()))
        );
    }
}
