//! Message handlers driving the application state.
//!
//! Tasks returned by the handlers are not executed; responses are fed back
//! as messages the way the runtime would deliver them.

use std::sync::Arc;

use iced::keyboard::{self, key::Named};
use iced::widget::image::Handle;

use estate_client::{ClientError, InMemorySource};
use estate_core::{DetailStatus, ImageKey, ImageSlot, ListingContent, PRICE_STEP, Route};
use estate_gui::app::App;
use estate_gui::config::AppConfig;
use estate_gui::error::GuiError;
use estate_gui::handler::{DetailHandler, ListingHandler, MessageHandler, NavigationHandler};
use estate_gui::message::{
    DetailMessage, ListingMessage, Message, PriceFilterMessage, SearchMessage,
};
use estate_gui::state::{AppState, ViewState};
use estate_model::{PaginatedResult, Property, SortOption};

const PHOTO_URL: &str = "https://img.example.com/p1-a.jpg";

fn property() -> Property {
    let mut property = Property::new("p1", "Casa Campestre", 850_000_000.0);
    property.address = "Km 5 Via La Calera".to_string();
    property.first_image = Some(PHOTO_URL.to_string());
    property.images = Some(vec![
        PHOTO_URL.to_string(),
        "https://img.example.com/p1-b.jpg".to_string(),
    ]);
    property
}

fn new_state() -> AppState {
    let source = InMemorySource::new(vec![
        property(),
        Property::new("p2", "Lote Urbano", 120_000_000.0),
    ]);
    AppState::new(AppConfig::default(), Arc::new(source))
}

fn page(items: Vec<Property>) -> PaginatedResult {
    PaginatedResult {
        total_count: items.len() as u64,
        total_pages: 1,
        page_size: 12,
        items,
        ..Default::default()
    }
}

fn search(state: &mut AppState, msg: SearchMessage) {
    let _ = ListingHandler.handle(state, ListingMessage::Search(msg));
}

fn price(state: &mut AppState, msg: PriceFilterMessage) {
    let _ = ListingHandler.handle(state, ListingMessage::PriceFilter(msg));
}

fn detail_request(state: &AppState) -> estate_core::RequestId {
    match &state.view {
        ViewState::Detail(detail) => detail.request(),
        ViewState::Listing => panic!("expected the detail view"),
    }
}

fn detail_status(state: &AppState) -> Option<&DetailStatus> {
    match &state.view {
        ViewState::Detail(detail) => Some(detail.status()),
        ViewState::Listing => None,
    }
}

// =============================================================================
// SEARCH
// =============================================================================

#[test]
fn test_typing_waits_for_the_timer() {
    let mut state = new_state();
    search(&mut state, SearchMessage::Changed("Casa".to_string()));

    assert_eq!(state.search.text(), "Casa");
    assert!(state.search.is_pending());
    assert!(state.search_timer.is_some());
    assert_eq!(state.catalog.controller().query(), "");
    assert!(!state.catalog.is_loading());
}

#[test]
fn test_enter_commits_and_cancels_the_timer() {
    let mut state = new_state();
    search(&mut state, SearchMessage::Changed("Casa".to_string()));
    search(&mut state, SearchMessage::Submitted);

    assert_eq!(state.catalog.controller().query(), "Casa");
    assert!(state.catalog.is_loading());
    assert!(state.search_timer.is_none());
    assert!(!state.search.is_pending());
}

#[test]
fn test_elapsed_timer_commits_once() {
    let mut state = new_state();
    let ticket = state.search.input("Lote");
    search(&mut state, SearchMessage::DebounceElapsed(ticket));
    assert_eq!(state.catalog.controller().query(), "Lote");
    assert!(state.catalog.is_loading());

    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Ok(page(Vec::new())),
        },
    );
    search(&mut state, SearchMessage::DebounceElapsed(ticket));
    assert!(!state.catalog.is_loading());
}

#[test]
fn test_timer_after_enter_does_not_fire() {
    let mut state = new_state();
    let ticket = state.search.input("Casa");
    search(&mut state, SearchMessage::Submitted);

    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Ok(page(vec![property()])),
        },
    );

    search(&mut state, SearchMessage::Changed("Casa Campestre".to_string()));
    search(&mut state, SearchMessage::DebounceElapsed(ticket));
    assert_eq!(state.catalog.controller().query(), "Casa");
    assert!(!state.catalog.is_loading());
}

#[test]
fn test_numeric_search_becomes_a_price_range() {
    let mut state = new_state();
    search(&mut state, SearchMessage::Changed("100000000".to_string()));
    search(&mut state, SearchMessage::Submitted);

    let filters = state.catalog.controller().filters();
    assert_eq!(filters.min_price, Some(100_000_000.0));
    assert_eq!(filters.max_price, Some(150_000_000.0));
    assert_eq!(filters.query, None);
}

// =============================================================================
// PRICE FILTER
// =============================================================================

#[test]
fn test_dragging_previews_and_release_commits() {
    let mut state = new_state();
    price(&mut state, PriceFilterMessage::Toggled);
    assert!(state.price_filter.is_open());

    price(&mut state, PriceFilterMessage::LowDragged(PRICE_STEP * 2.0));
    assert_eq!(state.price_filter.preview().0, PRICE_STEP * 2.0);
    assert_eq!(state.catalog.controller().bounds().min, None);
    assert!(!state.catalog.is_loading());

    price(&mut state, PriceFilterMessage::Released);
    assert_eq!(state.catalog.controller().bounds().min, Some(PRICE_STEP * 2.0));
    assert_eq!(state.catalog.controller().bounds().max, None);
    assert!(state.catalog.is_loading());
}

#[test]
fn test_malformed_spinner_text_keeps_the_bound() {
    let mut state = new_state();
    price(&mut state, PriceFilterMessage::MaxTextChanged("300000000".to_string()));
    assert_eq!(state.catalog.controller().bounds().max, Some(300_000_000.0));

    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Ok(page(Vec::new())),
        },
    );

    price(&mut state, PriceFilterMessage::MaxTextChanged("3OO".to_string()));
    assert_eq!(state.price_filter.max_text(), "3OO");
    assert_eq!(state.catalog.controller().bounds().max, Some(300_000_000.0));
    assert!(!state.catalog.is_loading());
}

#[test]
fn test_clearing_the_filter_drops_both_bounds() {
    let mut state = new_state();
    price(&mut state, PriceFilterMessage::MinStepped(3));
    assert_eq!(state.catalog.controller().bounds().min, Some(PRICE_STEP * 3.0));

    price(&mut state, PriceFilterMessage::Cleared);
    assert!(state.catalog.controller().bounds().is_unbounded());
    assert!(!state.price_filter.has_filters());
}

// =============================================================================
// SORT AND PAGES
// =============================================================================

#[test]
fn test_sorting_reorders_without_fetching() {
    let mut state = new_state();
    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Ok(page(vec![
                property(),
                Property::new("p2", "Lote Urbano", 120_000_000.0),
            ])),
        },
    );

    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::SortSelected(SortOption::PriceAsc),
    );
    assert!(!state.catalog.is_loading());
    assert_eq!(state.catalog.content().card_keys(), ["p2", "p1"]);
}

#[test]
fn test_picking_a_page_fetches_it() {
    let mut state = new_state();
    let _ = ListingHandler.handle(&mut state, ListingMessage::PageSelected(2));
    assert_eq!(state.catalog.controller().page(), 2);
    assert!(state.catalog.is_loading());
}

// =============================================================================
// RESPONSES
// =============================================================================

#[test]
fn test_stale_list_responses_are_ignored() {
    let mut state = new_state();
    let first = state.catalog.begin_fetch().id;
    let second = state.catalog.begin_fetch().id;

    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request: first,
            result: Ok(page(vec![property()])),
        },
    );
    assert!(state.catalog.is_loading());
    assert!(state.catalog.result().items.is_empty());

    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request: second,
            result: Ok(page(Vec::new())),
        },
    );
    assert_eq!(state.catalog.content(), ListingContent::Empty);
}

#[test]
fn test_failed_list_shows_the_failure() {
    let mut state = new_state();
    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Err(GuiError::from(ClientError::Network("refused".to_string()))),
        },
    );
    assert_eq!(state.catalog.content(), ListingContent::Failed);
    assert!(state.catalog.failure().is_some());
}

#[test]
fn test_enter_after_a_failed_load_refetches() {
    let mut state = new_state();
    search(&mut state, SearchMessage::Changed("Casa".to_string()));
    search(&mut state, SearchMessage::Submitted);

    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Err(GuiError::from(ClientError::Network("refused".to_string()))),
        },
    );
    assert_eq!(state.catalog.content(), ListingContent::Failed);

    search(&mut state, SearchMessage::Submitted);
    assert_eq!(state.catalog.controller().query(), "Casa");
    assert!(state.catalog.is_loading());
    assert_eq!(state.catalog.content(), ListingContent::Loading);
}

#[test]
fn test_failed_listing_reloads_on_retry_and_on_return() {
    let mut state = new_state();
    let fail = |state: &mut AppState| {
        let request = state.catalog.begin_fetch().id;
        let _ = ListingHandler.handle(
            state,
            ListingMessage::PageLoaded {
                request,
                result: Err(GuiError::from(ClientError::Network("refused".to_string()))),
            },
        );
        assert!(state.catalog.failure().is_some());
    };

    fail(&mut state);
    let _ = ListingHandler.handle(&mut state, ListingMessage::Retry);
    assert!(state.catalog.is_loading());

    fail(&mut state);
    let _ = NavigationHandler.handle(&mut state, Route::detail("p1"));
    let _ = NavigationHandler.handle(&mut state, Route::Listing);
    assert!(state.catalog.is_loading());
    assert!(state.catalog.failure().is_none());
}

#[test]
fn test_returning_to_a_loaded_listing_does_not_refetch() {
    let mut state = new_state();
    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Ok(page(vec![property()])),
        },
    );

    let _ = NavigationHandler.handle(&mut state, Route::detail("p1"));
    let _ = NavigationHandler.handle(&mut state, Route::Listing);
    assert!(!state.catalog.is_loading());
    assert_eq!(state.catalog.content().card_keys(), ["p1"]);
}

#[test]
fn test_paging_away_releases_card_photos() {
    const OTHER_URL: &str = "https://img.example.com/p2-a.jpg";

    let mut state = new_state();
    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Ok(page(vec![property()])),
        },
    );
    assert_eq!(state.card_images.get(PHOTO_URL), Some(&ImageSlot::Pending));

    let _ = ListingHandler.handle(&mut state, ListingMessage::PageSelected(2));
    let mut other = Property::new("p2", "Lote Urbano", 120_000_000.0);
    other.first_image = Some(OTHER_URL.to_string());
    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Ok(page(vec![other])),
        },
    );
    assert_eq!(state.card_images.get(PHOTO_URL), None);
    assert_eq!(state.card_images.get(OTHER_URL), Some(&ImageSlot::Pending));
    assert_eq!(state.card_images.len(), 1);

    // A photo from the previous page arriving late is not stored.
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::CardImageLoaded {
            url: PHOTO_URL.to_string(),
            result: Ok(Handle::from_bytes(Vec::<u8>::new())),
        },
    );
    assert_eq!(state.card_images.get(PHOTO_URL), None);
    assert_eq!(state.card_images.len(), 1);
}

#[test]
fn test_card_photo_failure_falls_back() {
    let mut state = new_state();
    let request = state.catalog.begin_fetch().id;
    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::PageLoaded {
            request,
            result: Ok(page(vec![property()])),
        },
    );
    assert_eq!(state.card_images.get(PHOTO_URL), Some(&ImageSlot::Pending));

    let _ = ListingHandler.handle(
        &mut state,
        ListingMessage::CardImageLoaded {
            url: PHOTO_URL.to_string(),
            result: Err(GuiError::image_decode(PHOTO_URL, "truncated")),
        },
    );
    assert!(state.card_images.get(PHOTO_URL).is_some_and(ImageSlot::is_fallback));
}

// =============================================================================
// DETAIL
// =============================================================================

#[test]
fn test_opening_a_property_starts_loading() {
    let mut state = new_state();
    let _ = NavigationHandler.handle(&mut state, Route::detail("p1"));
    assert_eq!(state.view.route(), Route::detail("p1"));
    assert_eq!(detail_status(&state), Some(&DetailStatus::Loading));
}

#[test]
fn test_loaded_property_tracks_each_photo() {
    let mut state = new_state();
    let _ = NavigationHandler.handle(&mut state, Route::detail("p1"));
    let request = detail_request(&state);

    let _ = DetailHandler.handle(
        &mut state,
        DetailMessage::Loaded {
            request,
            result: Ok(property()),
        },
    );
    assert!(matches!(detail_status(&state), Some(DetailStatus::Loaded(_))));

    let _ = DetailHandler.handle(
        &mut state,
        DetailMessage::ImageLoaded {
            request,
            key: ImageKey::Primary,
            result: Err(GuiError::image_decode(PHOTO_URL, "truncated")),
        },
    );

    let ViewState::Detail(detail) = &state.view else {
        panic!("expected the detail view");
    };
    assert!(detail.image(ImageKey::Primary).is_fallback());
    assert_eq!(detail.image(ImageKey::Gallery(0)), &ImageSlot::Pending);
}

#[test]
fn test_missing_property_fails() {
    let mut state = new_state();
    let _ = NavigationHandler.handle(&mut state, Route::detail("nope"));
    let request = detail_request(&state);

    let _ = DetailHandler.handle(
        &mut state,
        DetailMessage::Loaded {
            request,
            result: Err(GuiError::from(ClientError::NotFound {
                id: "nope".to_string(),
            })),
        },
    );
    assert_eq!(detail_status(&state), Some(&DetailStatus::Failed));
}

#[test]
fn test_response_for_a_previous_property_is_ignored() {
    let mut state = new_state();
    let _ = NavigationHandler.handle(&mut state, Route::detail("p1"));
    let first = detail_request(&state);
    let _ = NavigationHandler.handle(&mut state, Route::detail("p2"));

    let _ = DetailHandler.handle(
        &mut state,
        DetailMessage::Loaded {
            request: first,
            result: Ok(property()),
        },
    );
    assert_eq!(state.view.route(), Route::detail("p2"));
    assert_eq!(detail_status(&state), Some(&DetailStatus::Loading));
}

#[test]
fn test_response_after_leaving_is_ignored() {
    let mut state = new_state();
    let _ = NavigationHandler.handle(&mut state, Route::detail("p1"));
    let request = detail_request(&state);
    let _ = NavigationHandler.handle(&mut state, Route::Listing);

    let _ = DetailHandler.handle(
        &mut state,
        DetailMessage::Loaded {
            request,
            result: Ok(property()),
        },
    );
    assert!(matches!(state.view, ViewState::Listing));
}

// =============================================================================
// APPLICATION
// =============================================================================

#[test]
fn test_starting_on_a_property_also_loads_the_listing() {
    let source = InMemorySource::new(vec![property()]);
    let (app, _) = App::new(AppConfig::default(), Arc::new(source), Route::detail("p1"));

    assert!(app.state.catalog.is_loading());
    assert_eq!(app.state.view.route(), Route::detail("p1"));
    assert_eq!(app.title(), "Estate Studio");
}

#[test]
fn test_escape_leaves_the_detail_view() {
    let source = InMemorySource::new(vec![property()]);
    let (mut app, _) = App::new(AppConfig::default(), Arc::new(source), Route::detail("p1"));
    let request = detail_request(&app.state);

    let _ = app.update(Message::Detail(DetailMessage::Loaded {
        request,
        result: Ok(property()),
    }));
    assert_eq!(app.title(), "Casa Campestre - Estate Studio");

    let _ = app.update(Message::KeyPressed(
        keyboard::Key::Named(Named::Escape),
        keyboard::Modifiers::default(),
    ));
    assert!(matches!(app.state.view, ViewState::Listing));
    assert_eq!(app.title(), "Estate Studio");
}
