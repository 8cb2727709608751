//! Tests for search, filter, and listing behavior.

use estate_core::{
    CatalogSession, ListingContent, MAX_PRICE, MIN_PRICE, PRICE_STEP, PriceBounds, PriceFilter,
    SearchBar, SearchController, derive_filters,
};
use estate_model::{PaginatedResult, Property, SortOption};
use proptest::prelude::*;

fn page_of(count: usize) -> PaginatedResult {
    let items: Vec<Property> = (0..count)
        .map(|i| Property::new(format!("id-{i}"), format!("Property {i}"), i as f64))
        .collect();
    PaginatedResult {
        total_count: count as u64,
        total_pages: 1,
        items,
        ..Default::default()
    }
}

#[test]
fn test_numeric_query_example() {
    let filters = derive_filters("150000000", PriceBounds::default(), 1, 12);
    let described = describe(&filters);
    assert_eq!(described, "min=150000000 max=225000000 query=-");
}

#[test]
fn test_text_query_example() {
    let filters = derive_filters("Casa", PriceBounds::default(), 1, 12);
    assert_eq!(describe(&filters), "min=- max=- query=Casa");
}

fn describe(filters: &estate_model::PropertyFilters) -> String {
    let show = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v}"));
    format!(
        "min={} max={} query={}",
        show(filters.min_price),
        show(filters.max_price),
        filters.query.as_deref().unwrap_or("-")
    )
}

#[test]
fn test_search_bar_feeds_controller() {
    let mut bar = SearchBar::default();
    let mut controller = SearchController::default();
    controller.set_page(5);

    let _ = bar.input("Ca");
    let ticket = bar.input("Casa");
    let committed = bar.timer_elapsed(ticket).unwrap();
    assert!(controller.set_search_query(&committed));
    assert_eq!(controller.filters().query.as_deref(), Some("Casa"));
    assert_eq!(controller.page(), 1);
}

#[test]
fn test_price_filter_feeds_controller() {
    let mut filter = PriceFilter::default();
    let mut controller = SearchController::default();

    filter.drag_low(100_000_000.0);
    let bounds = filter.release();
    controller.set_price_range(bounds);
    assert_eq!(controller.filters().min_price, Some(100_000_000.0));
    assert_eq!(controller.filters().max_price, None);

    controller.set_price_range(filter.clear());
    assert_eq!(controller.filters().min_price, None);
}

#[test]
fn test_three_properties_render_three_cards() {
    let mut session = CatalogSession::new(12);
    let request = session.begin_fetch();
    session.finish_fetch(request.id, Ok(page_of(3)));

    let content = session.content();
    assert_eq!(content.card_keys(), ["id-0", "id-1", "id-2"]);

    session.set_sort_option(SortOption::PriceDesc);
    assert_eq!(session.content().card_keys(), ["id-2", "id-1", "id-0"]);
}

fn arb_sort() -> impl Strategy<Value = SortOption> {
    prop::sample::select(SortOption::ALL.to_vec())
}

fn arb_bound() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(0.0f64..1.0e9)
}

#[derive(Debug, Clone)]
enum Op {
    Query(String),
    Price(Option<f64>, Option<f64>),
    Sort(SortOption),
    Page(u32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,8}".prop_map(Op::Query),
        (arb_bound(), arb_bound()).prop_map(|(a, b)| Op::Price(a, b)),
        arb_sort().prop_map(Op::Sort),
        (1u32..50).prop_map(Op::Page),
    ]
}

proptest! {
    #[test]
    fn test_debounced_input_commits_last_text_once(texts in prop::collection::vec("[a-z0-9 ]{0,12}", 1..10)) {
        let mut bar = SearchBar::default();
        let tickets: Vec<_> = texts.iter().map(|t| bar.input(t.clone())).collect();

        let (last, earlier) = tickets.split_last().unwrap();
        for ticket in earlier {
            prop_assert_eq!(bar.timer_elapsed(*ticket), None);
        }
        prop_assert_eq!(bar.timer_elapsed(*last), Some(texts.last().unwrap().clone()));
        prop_assert_eq!(bar.timer_elapsed(*last), None);
    }

    #[test]
    fn test_enter_suppresses_pending_timer(text in "[a-z]{1,12}") {
        let mut bar = SearchBar::default();
        let ticket = bar.input(text.clone());
        prop_assert_eq!(bar.submit(), text);
        prop_assert_eq!(bar.timer_elapsed(ticket), None);
    }

    #[test]
    fn test_release_normalizes_extremes(low in 0u32..=100, high in 0u32..=100) {
        let (low, high) = (f64::from(low.min(high)) * PRICE_STEP, f64::from(low.max(high)) * PRICE_STEP);
        let mut filter = PriceFilter::default();
        filter.drag_high(high);
        filter.drag_low(low);
        let bounds = filter.release();

        let expected_min = if low == MIN_PRICE { None } else { Some(low) };
        let expected_max = if high == MAX_PRICE { None } else { Some(high) };
        prop_assert_eq!(bounds, PriceBounds::new(expected_min, expected_max));
    }

    #[test]
    fn test_bare_number_becomes_range(n in 1u64..1_000_000_000_000) {
        let value = n as f64;
        let filters = derive_filters(&n.to_string(), PriceBounds::default(), 1, 12);
        prop_assert_eq!(filters.min_price, Some(value));
        prop_assert_eq!(filters.max_price, Some(value * 1.5));
        prop_assert_eq!(filters.query, None);
    }

    #[test]
    fn test_page_resets_only_on_query_or_price(ops in prop::collection::vec(arb_op(), 1..20)) {
        let mut controller = SearchController::default();
        for op in ops {
            let page_before = controller.page();
            match op {
                Op::Query(text) => {
                    controller.set_search_query(&text);
                    prop_assert_eq!(controller.page(), 1);
                }
                Op::Price(min, max) => {
                    controller.set_price_range(PriceBounds::new(min, max));
                    prop_assert_eq!(controller.page(), 1);
                }
                Op::Sort(sort) => {
                    controller.set_sort_option(sort);
                    prop_assert_eq!(controller.page(), page_before);
                }
                Op::Page(page) => {
                    let before = controller.filters().clone();
                    controller.set_page(page);
                    let after = controller.filters();
                    prop_assert_eq!(after.page, page);
                    prop_assert_eq!(&after.query, &before.query);
                    prop_assert_eq!(after.min_price, before.min_price);
                    prop_assert_eq!(after.max_price, before.max_price);
                }
            }
            let derived = derive_filters(
                controller.query(),
                controller.bounds(),
                controller.page(),
                controller.page_size(),
            );
            prop_assert_eq!(controller.filters(), &derived);
        }
    }

    #[test]
    fn test_loading_hides_items(count in 0usize..20) {
        let mut session = CatalogSession::new(12);
        let first = session.begin_fetch();
        session.finish_fetch(first.id, Ok(page_of(count)));
        let _ = session.begin_fetch();
        prop_assert_eq!(session.content(), ListingContent::Loading);
    }
}
