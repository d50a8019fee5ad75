//! Integration tests for Dexview
//!
//! Exercises the loader, query engine, paginator and views together against
//! the fixture catalog.


use dexview::models::Direction;
use dexview::paginate::paginate;
use dexview::query::matches;
use dexview::views::{DetailView, GalleryView, ListView};
use dexview::{Catalog, CatalogConfig, PokemonType, QueryEngine, QueryState, SortMode};
use std::sync::atomic::Ordering;
use test_helpers::*;

// ==================== Loading ====================

#[tokio::test]
async fn test_load_requests_every_type_and_tolerates_partial_data() {
    let source = FixtureSource::new();
    let catalog = Catalog::load(&source).await.unwrap();

    assert_eq!(source.type_requests.load(Ordering::SeqCst), 18);
    assert_eq!(catalog.count(), 1302);
    assert_eq!(catalog.entries().len(), 23);
    assert!(catalog.type_index().is_ready());

    let charizard = catalog.type_index().types_of("charizard");
    assert!(charizard.contains(&PokemonType::Fire));
    assert!(charizard.contains(&PokemonType::Flying));
    assert!(catalog.type_index().types_of("missingno").is_empty());
}

#[tokio::test]
async fn test_catalog_failure_is_fatal() {
    let err = Catalog::load(&FixtureSource::failing_catalog()).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load catalog from fixtures"));
}

#[tokio::test]
async fn test_no_type_data_leaves_filters_pass_through() {
    let catalog = Catalog::load(&FixtureSource::without_types()).await.unwrap();
    assert!(!catalog.type_index().is_ready());

    let engine = QueryEngine::new(catalog.entries(), catalog.type_index());
    let with_types = QueryState::default().with_types([PokemonType::Dragon]);
    assert_eq!(engine.run(&with_types).len(), engine.run(&QueryState::default()).len());
}

// ==================== Query properties ====================

#[test]
fn test_paginated_filter_output_is_exactly_the_matches() {
    let catalog = load_fixture_catalog();
    let engine = QueryEngine::new(catalog.entries(), catalog.type_index());

    for search in ["", "c", "1", "25", "pi", "zzz"] {
        for mode in [SortMode::DexAsc, SortMode::DexDesc, SortMode::NameAsc, SortMode::NameDesc] {
            let state = QueryState::new(search, mode);
            let sorted = engine.run(&state);

            let flattened: Vec<_> = paginate(&sorted, 9).concat();
            assert_eq!(flattened, sorted);
            assert!(paginate(&sorted, 9).iter().all(|p| p.len() <= 9));

            let expected = catalog
                .entries()
                .iter()
                .filter(|e| matches(e, &state, catalog.type_index()))
                .count();
            assert_eq!(sorted.len(), expected, "search={:?} mode={}", search, mode);
        }
    }
}

#[test]
fn test_search_by_prefix() {
    let catalog = load_fixture_catalog();
    let engine = QueryEngine::new(catalog.entries(), catalog.type_index());

    let pika = engine.run(&QueryState::new("pika", SortMode::DexAsc));
    assert_eq!(names(pika), vec!["pikachu"]);

    let by_id = engine.run(&QueryState::new("25", SortMode::DexAsc));
    assert_eq!(names(by_id), vec!["pikachu", "ho-oh", "celebi"]);
}

#[test]
fn test_type_filter_conjunction() {
    let catalog = load_fixture_catalog();
    let engine = QueryEngine::new(catalog.entries(), catalog.type_index());

    let state = QueryState::default().with_types([PokemonType::Fire, PokemonType::Flying]);
    assert_eq!(names(engine.run(&state)), vec!["charizard", "moltres", "ho-oh"]);

    let state = QueryState::default().with_types([PokemonType::Fire]);
    assert!(names(engine.run(&state)).contains(&"charmander".to_string()));
}

#[test]
fn test_malformed_entry_sorts_first_and_stays_stable() {
    let catalog = load_fixture_catalog();
    let engine = QueryEngine::new(catalog.entries(), catalog.type_index());

    let asc = engine.run(&QueryState::new("", SortMode::DexAsc));
    assert_eq!(asc[0].name, "missingno");
    assert_eq!(asc[0].dex_label(), "0000");
    assert_eq!(asc.last().unwrap().name, "venusaur-mega");
}

#[test]
fn test_query_is_idempotent() {
    let catalog = load_fixture_catalog();
    let engine = QueryEngine::new(catalog.entries(), catalog.type_index());
    let state = QueryState::new("", SortMode::NameDesc).with_types([PokemonType::Flying]);
    assert_eq!(engine.run(&state), engine.run(&state));
}

// ==================== Views ====================

#[test]
fn test_gallery_walkthrough() {
    let catalog = load_fixture_catalog();
    let config = CatalogConfig::default();
    let mut gallery = GalleryView::new(&catalog, config.page_size);

    assert_eq!(gallery.page_count(), 3);
    gallery.advance();
    gallery.advance();
    assert_eq!(gallery.active_page(), 2);
    assert_eq!(gallery.current_page().len(), 5);

    gallery.set_selected_types([PokemonType::Flying]);
    assert_eq!(gallery.page_count(), 1);
    assert_eq!(gallery.active_page(), 0);
    assert!(!gallery.has_paging_controls());

    let page = gallery.page(&config);
    assert_eq!(page.matched, 8);
    assert!(page.entries.iter().all(|e| e.types.contains(&PokemonType::Flying)));
}

#[test]
fn test_list_view_count_and_selection() {
    let catalog = load_fixture_catalog();
    let mut list = ListView::new(&catalog);
    list.set_search_text("char");
    list.set_sort_mode(SortMode::NameAsc);

    let page = list.page(&CatalogConfig::default());
    assert_eq!(page.matched, 3);
    assert_eq!(page.total, 1302);
    assert_eq!(page.entries[0].name, "charizard");
    assert_eq!(page.selected_id, 6);
}

#[tokio::test]
async fn test_detail_view_walks_canonical_order() {
    let source = FixtureSource::new();
    let catalog = Catalog::load(&source).await.unwrap();

    let view = DetailView::load(&source, &catalog, 25).await.unwrap();
    assert_eq!(view.prev_id(), 17);
    assert_eq!(view.next_id(), 26);

    let page = view.page(&CatalogConfig::default());
    assert_eq!(page.stats.len(), 6);
    assert_eq!(page.types, vec!["electric"]);
    assert!(page.type_icon_urls[0].ends_with("/13.png"));
}

#[tokio::test]
async fn test_detail_fetch_failure_is_reported() {
    let source = FixtureSource::new();
    let catalog = Catalog::load(&source).await.unwrap();
    let err = DetailView::load(&source, &catalog, 9999).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load entry #9999"));
}

#[test]
fn test_navigator_clamps_at_catalog_ends() {
    let catalog = load_fixture_catalog();
    let entries = catalog.entries();
    let nav = catalog.navigator();

    let first = &entries[0];
    let last = &entries[entries.len() - 1];
    assert_eq!(nav.neighbor_entry(entries, &first.name, Direction::Prev), Some(first));
    assert_eq!(nav.neighbor_entry(entries, &last.name, Direction::Next), Some(last));

    // missingno (sentinel id) sits before venusaur-mega
    assert_eq!(nav.neighbor(entries, "venusaur-mega", Direction::Prev), 0);
}
