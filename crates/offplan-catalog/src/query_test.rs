use super::*;
use crate::fixtures::{record, sample_catalog};

fn ids<'a>(page: &QueryPage<'a>) -> Vec<&'a str> {
    page.items.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn default_query_returns_everything_sorted_by_title() {
    let catalog = sample_catalog();
    let page = query(&catalog, &QueryState::default());
    assert_eq!(page.total_matched, 6);
    assert_eq!(page.total_pages, 1);
    // Lowercase "azure" sorts with the A's, not after every capital letter.
    assert_eq!(ids(&page), vec!["2", "5", "3", "6", "1", "4"]);
}

#[test]
fn title_sort_places_accented_initials_with_their_base_letter() {
    let catalog = vec![
        record("1", "Zenith Tower", "Emaar", "Downtown", 1_000_000),
        record("2", "Élan Residences", "Sobha", "Business Bay", 1_000_000),
        record("3", "Azure Bay", "Nakheel", "Palm Jumeirah", 1_000_000),
        record("4", "Elm Court", "Emaar", "Downtown", 1_000_000),
    ];
    let page = query(&catalog, &QueryState::default());
    assert_eq!(ids(&page), vec!["3", "2", "4", "1"]);
}

#[test]
fn title_sort_breaks_accent_ties_after_plain_spelling() {
    let catalog = vec![
        record("1", "Résidence", "Emaar", "Downtown", 1_000_000),
        record("2", "Residence", "Emaar", "Downtown", 1_000_000),
    ];
    let page = query(&catalog, &QueryState::default());
    assert_eq!(ids(&page), vec!["2", "1"]);
}

#[test]
fn search_matches_title_or_region_case_insensitively() {
    let catalog = sample_catalog();
    let state = QueryState {
        search: "BAY".to_string(),
        ..QueryState::default()
    };
    let page = query(&catalog, &state);
    assert_eq!(ids(&page), vec!["2", "5"]);
}

#[test]
fn search_matches_developer() {
    let catalog = sample_catalog();
    let state = QueryState {
        search: "emaar".to_string(),
        ..QueryState::default()
    };
    let page = query(&catalog, &state);
    assert_eq!(page.total_matched, 3);
    assert_eq!(ids(&page), vec!["3", "6", "1"]);
}

#[test]
fn search_with_no_hits_yields_single_empty_page() {
    let catalog = sample_catalog();
    let state = QueryState {
        search: "downtown".to_string(),
        ..QueryState::default()
    };
    let page = query(&catalog, &state);
    assert_eq!(page.total_matched, 0);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
    assert!(page.item_range().is_none());
}

#[test]
fn region_type_developer_are_exact_matches() {
    let catalog = sample_catalog();

    let by_region = QueryState {
        region: Some("Dubai Marina".to_string()),
        ..QueryState::default()
    };
    assert_eq!(ids(&query(&catalog, &by_region)), vec!["6", "1"]);

    let partial_region = QueryState {
        region: Some("Marina".to_string()),
        ..QueryState::default()
    };
    assert_eq!(query(&catalog, &partial_region).total_matched, 0);

    let by_type = QueryState {
        property_type: Some("Villa".to_string()),
        ..QueryState::default()
    };
    assert_eq!(ids(&query(&catalog, &by_type)), vec!["4"]);

    let by_developer = QueryState {
        developer: Some("Sobha".to_string()),
        ..QueryState::default()
    };
    assert_eq!(ids(&query(&catalog, &by_developer)), vec!["2", "5"]);
}

#[test]
fn empty_filter_values_are_ignored() {
    let catalog = sample_catalog();
    let state = QueryState {
        region: Some(String::new()),
        property_type: Some(String::new()),
        developer: Some(String::new()),
        ..QueryState::default()
    };
    assert_eq!(query(&catalog, &state).total_matched, 6);
}

#[test]
fn max_price_is_inclusive() {
    let catalog = sample_catalog();
    let state = QueryState {
        max_price: 1_100_000,
        ..QueryState::default()
    };
    assert_eq!(ids(&query(&catalog, &state)), vec!["2", "5", "3"]);
}

#[test]
fn min_bedrooms_treats_missing_as_zero() {
    let catalog = sample_catalog();
    let state = QueryState {
        min_bedrooms: Some(2),
        ..QueryState::default()
    };
    assert_eq!(ids(&query(&catalog, &state)), vec!["2", "6", "4"]);

    let zero = QueryState {
        min_bedrooms: Some(0),
        ..QueryState::default()
    };
    assert_eq!(query(&catalog, &zero).total_matched, 6);
}

#[test]
fn filters_are_and_combined() {
    let catalog = sample_catalog();
    let state = QueryState {
        search: "marina".to_string(),
        min_bedrooms: Some(3),
        ..QueryState::default()
    };
    assert_eq!(ids(&query(&catalog, &state)), vec!["6"]);
}

#[test]
fn price_asc_keeps_catalog_order_for_ties() {
    let catalog = sample_catalog();
    let state = QueryState {
        sort: SortKey::PriceAsc,
        ..QueryState::default()
    };
    assert_eq!(
        ids(&query(&catalog, &state)),
        vec!["5", "2", "3", "1", "6", "4"]
    );
}

#[test]
fn price_desc_keeps_catalog_order_for_ties() {
    let catalog = sample_catalog();
    let state = QueryState {
        sort: SortKey::PriceDesc,
        ..QueryState::default()
    };
    assert_eq!(
        ids(&query(&catalog, &state)),
        vec!["4", "6", "1", "2", "3", "5"]
    );
}

#[test]
fn handover_sort_puts_missing_dates_first() {
    let catalog = sample_catalog();
    let state = QueryState {
        sort: SortKey::Handover,
        ..QueryState::default()
    };
    assert_eq!(
        ids(&query(&catalog, &state)),
        vec!["3", "5", "2", "6", "1", "4"]
    );
}

#[test]
fn pagination_splits_matches() {
    let catalog = sample_catalog();
    let first = query(
        &catalog,
        &QueryState {
            page_size: 4,
            ..QueryState::default()
        },
    );
    assert_eq!(first.items.len(), 4);
    assert_eq!(first.total_pages, 2);
    assert!(!first.has_previous());
    assert!(first.has_next());
    assert_eq!(first.item_range(), Some((1, 4)));

    let second = query(
        &catalog,
        &QueryState {
            page_size: 4,
            page: 2,
            ..QueryState::default()
        },
    );
    assert_eq!(ids(&second), vec!["1", "4"]);
    assert!(second.has_previous());
    assert!(!second.has_next());
    assert_eq!(second.item_range(), Some((5, 6)));
}

#[test]
fn out_of_range_pages_are_empty_not_errors() {
    let catalog = sample_catalog();
    for page in [0, 3, usize::MAX] {
        let result = query(
            &catalog,
            &QueryState {
                page_size: 4,
                page,
                ..QueryState::default()
            },
        );
        assert!(result.items.is_empty(), "page {page} should be empty");
        assert_eq!(result.total_matched, 6);
        assert_eq!(result.total_pages, 2);
    }
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let catalog = sample_catalog();
    let page = query(
        &catalog,
        &QueryState {
            page_size: 0,
            ..QueryState::default()
        },
    );
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_pages, 6);
}

#[test]
fn empty_catalog_has_one_page() {
    let page = query(&[], &QueryState::default());
    assert_eq!(page.total_matched, 0);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn filter_matches_agrees_with_query() {
    let catalog = sample_catalog();
    let state = QueryState {
        developer: Some("Emaar".to_string()),
        max_price: 3_000_000,
        ..QueryState::default()
    };
    let expected = catalog.iter().filter(|r| filter_matches(r, &state)).count();
    assert_eq!(query(&catalog, &state).total_matched, expected);
    assert_eq!(expected, 2);
}

#[test]
fn sort_key_parses_aliases() {
    assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
    assert_eq!("price-asc".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
    assert_eq!("price-desc".parse::<SortKey>().unwrap(), SortKey::PriceDesc);
    assert_eq!("handover".parse::<SortKey>().unwrap(), SortKey::Handover);
    assert!("newest".parse::<SortKey>().is_err());
}

#[test]
fn sort_key_display_round_trips_through_from_str() {
    for key in [
        SortKey::Title,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Handover,
    ] {
        assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
    }
}

#[test]
fn query_state_deserializes_with_defaults() {
    let state: QueryState =
        serde_json::from_str(r#"{"search": "palm", "sort": "price"}"#).unwrap();
    assert_eq!(state.search, "palm");
    assert_eq!(state.sort, SortKey::PriceAsc);
    assert_eq!(state.page, 1);
    assert_eq!(state.page_size, 12);
    assert_eq!(state.max_price, 50_000_000);
}
