//! Listing view message handler.
//!
//! Handles:
//! - Search text with its debounce timer
//! - Price range commits
//! - Sort and page changes
//! - List responses and card photos

use std::collections::HashSet;
use std::sync::Arc;

use iced::Task;

use estate_core::{DebounceTicket, PriceBounds, RequestId};
use estate_model::PaginatedResult;

use super::MessageHandler;
use crate::error::GuiError;
use crate::message::{ListingMessage, Message, PriceFilterMessage, SearchMessage};
use crate::service::{fetch_page, fetch_photo};
use crate::state::AppState;

/// Handler for listing view messages.
pub struct ListingHandler;

impl MessageHandler<ListingMessage> for ListingHandler {
    fn handle(&self, state: &mut AppState, msg: ListingMessage) -> Task<Message> {
        match msg {
            ListingMessage::Search(msg) => handle_search(state, msg),

            ListingMessage::PriceFilter(msg) => handle_price_filter(state, msg),

            ListingMessage::SortSelected(sort) => {
                tracing::debug!(sort = sort.as_str(), "Sort changed");
                state.catalog.set_sort_option(sort);
                Task::none()
            }

            ListingMessage::PageSelected(page) => {
                if state.catalog.set_page(page) {
                    refresh_listing(state)
                } else {
                    Task::none()
                }
            }

            ListingMessage::Retry => {
                tracing::debug!("Retrying property list request");
                refresh_listing(state)
            }

            ListingMessage::PageLoaded { request, result } => page_loaded(state, request, result),

            ListingMessage::CardImageLoaded { url, result } => {
                match result {
                    Ok(handle) => {
                        if !state.card_images.loaded(url.clone(), handle) {
                            tracing::debug!(%url, "Dropping photo for a card no longer shown");
                        }
                    }
                    Err(err) => {
                        tracing::debug!(%url, %err, "Card photo failed, using fallback");
                        state.card_images.failed(url);
                    }
                }
                Task::none()
            }
        }
    }
}

/// Issue a list request for the current filters.
///
/// Any request still in flight becomes stale; its response is discarded.
pub fn refresh_listing(state: &mut AppState) -> Task<Message> {
    let request = state.catalog.begin_fetch();
    let id = request.id;
    Task::perform(
        fetch_page(Arc::clone(&state.source), request.filters),
        move |result| Message::Listing(ListingMessage::PageLoaded { request: id, result }),
    )
}

// =============================================================================
// SEARCH
// =============================================================================

fn handle_search(state: &mut AppState, msg: SearchMessage) -> Task<Message> {
    match msg {
        SearchMessage::Changed(text) => {
            let ticket = state.search.input(text);
            start_search_timer(state, ticket)
        }

        SearchMessage::Cleared => {
            let ticket = state.search.clear();
            start_search_timer(state, ticket)
        }

        SearchMessage::Submitted => {
            state.cancel_search_timer();
            let text = state.search.submit();
            commit_query(state, &text)
        }

        SearchMessage::DebounceElapsed(ticket) => match state.search.timer_elapsed(ticket) {
            Some(text) => {
                state.search_timer = None;
                commit_query(state, &text)
            }
            None => Task::none(),
        },
    }
}

/// Restart the debounce timer. The previous timer is aborted.
fn start_search_timer(state: &mut AppState, ticket: DebounceTicket) -> Task<Message> {
    state.cancel_search_timer();
    let delay = state.search.delay();
    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| Message::Listing(ListingMessage::Search(SearchMessage::DebounceElapsed(ticket))),
    )
    .abortable();
    state.search_timer = Some(handle.abort_on_drop());
    task
}

fn commit_query(state: &mut AppState, text: &str) -> Task<Message> {
    if state.catalog.set_search_query(text) {
        tracing::debug!(query = text, "Search committed");
        refresh_listing(state)
    } else {
        Task::none()
    }
}

// =============================================================================
// PRICE FILTER
// =============================================================================

fn handle_price_filter(state: &mut AppState, msg: PriceFilterMessage) -> Task<Message> {
    let filter = &mut state.price_filter;
    let committed = match msg {
        PriceFilterMessage::Toggled => {
            filter.toggle();
            None
        }
        PriceFilterMessage::Closed => {
            filter.close();
            None
        }
        PriceFilterMessage::LowDragged(value) => {
            filter.drag_low(value);
            None
        }
        PriceFilterMessage::HighDragged(value) => {
            filter.drag_high(value);
            None
        }
        PriceFilterMessage::Released => Some(filter.release()),
        PriceFilterMessage::MinTextChanged(text) => filter.set_min_text(&text),
        PriceFilterMessage::MaxTextChanged(text) => filter.set_max_text(&text),
        PriceFilterMessage::MinStepped(steps) => Some(filter.step_min(steps)),
        PriceFilterMessage::MaxStepped(steps) => Some(filter.step_max(steps)),
        PriceFilterMessage::Cleared => Some(filter.clear()),
    };

    match committed {
        Some(bounds) => commit_price(state, bounds),
        None => Task::none(),
    }
}

fn commit_price(state: &mut AppState, bounds: PriceBounds) -> Task<Message> {
    if state.catalog.set_price_range(bounds) {
        tracing::debug!(min = ?bounds.min, max = ?bounds.max, "Price range committed");
        refresh_listing(state)
    } else {
        Task::none()
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

fn page_loaded(
    state: &mut AppState,
    request: RequestId,
    result: Result<PaginatedResult, GuiError>,
) -> Task<Message> {
    let result = result.map_err(|err| err.user_message());
    if !state.catalog.finish_fetch(request, result) {
        return Task::none();
    }

    let shown: HashSet<&str> = state
        .catalog
        .result()
        .items
        .iter()
        .filter_map(|property| property.primary_image())
        .collect();

    // Photos of cards that left the page are released.
    state.card_images.retain(|url| shown.contains(url.as_str()));

    let urls: Vec<String> = shown
        .into_iter()
        .filter_map(|url| state.card_images.track(url.to_string(), Some(url)))
        .collect();

    Task::batch(urls.into_iter().map(|url| {
        let source = Arc::clone(&state.source);
        Task::perform(fetch_photo(source, url.clone()), move |result| {
            Message::Listing(ListingMessage::CardImageLoaded { url, result })
        })
    }))
}
