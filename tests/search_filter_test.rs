use std::path::PathBuf;

use patternbook::search::filter;
use patternbook::{CatalogItem, CatalogStore, FieldSet, SearchField};
use pretty_assertions::assert_eq;

fn fixture_store() -> CatalogStore {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json");
    let content = std::fs::read_to_string(&path).unwrap();
    CatalogStore::from_json(&path.display().to_string(), &content).unwrap()
}

fn ids<T: AsRef<CatalogItem>>(items: &[&T]) -> Vec<String> {
    items.iter().map(|item| (*item).as_ref().id.clone()).collect()
}

#[test]
fn test_empty_query_returns_everything_in_order() {
    let store = fixture_store();
    let result = filter("", store.items(), &FieldSet::default());
    assert_eq!(ids(&result), vec!["teddy", "coaster", "shawl"]);

    let result = filter("   ", store.items(), &FieldSet::all());
    assert_eq!(result.len(), store.len());
}

#[test]
fn test_name_search_is_case_insensitive() {
    let store = fixture_store();
    let result = filter("TEDDY", store.items(), &FieldSet::default());
    assert_eq!(ids(&result), vec!["teddy"]);

    let result = filter("granny", store.items(), &FieldSet::default());
    assert_eq!(ids(&result), vec!["coaster"]);
}

#[test]
fn test_unselected_fields_are_ignored() {
    let store = fixture_store();

    // "Home" is a category, not part of any name
    assert!(filter("home", store.items(), &FieldSet::default()).is_empty());

    let categories = FieldSet::new([SearchField::Category]);
    let result = filter("home", store.items(), &categories);
    assert_eq!(ids(&result), vec!["coaster"]);
}

#[test]
fn test_list_fields_match_any_entry() {
    let store = fixture_store();
    let tools = FieldSet::new([SearchField::Tools]);
    let result = filter("hook", store.items(), &tools);
    assert_eq!(ids(&result), vec!["teddy", "coaster", "shawl"]);

    let result = filter("blocking", store.items(), &tools);
    assert_eq!(ids(&result), vec!["shawl"]);
}

#[test]
fn test_results_are_a_stable_matching_subset() {
    let store = fixture_store();
    let fields = FieldSet::new([SearchField::Name, SearchField::Difficulty]);

    for query in ["a", "e", "ce", "beginner", "lace", "zzz"] {
        let result = filter(query, store.items(), &fields);
        let lowered = query.to_lowercase();

        for item in &result {
            assert!(
                item.name.to_lowercase().contains(&lowered)
                    || item.difficulty.to_lowercase().contains(&lowered),
                "{} does not match {query}",
                item.id
            );
        }

        // Relative order follows the catalog
        let positions: Vec<usize> = result
            .iter()
            .map(|item| {
                store
                    .items()
                    .iter()
                    .position(|candidate| candidate.id == item.id)
                    .unwrap()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}

#[test]
fn test_filter_over_plain_items() {
    let items = vec![
        CatalogItem {
            id: "x".to_string(),
            name: "Xylophone Cozy".to_string(),
            ..Default::default()
        },
        CatalogItem {
            id: "y".to_string(),
            name: "Yoga Mat Bag".to_string(),
            ..Default::default()
        },
    ];
    let result = filter("cozy", &items, &FieldSet::default());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "x");
}
