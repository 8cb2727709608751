//! Property listing view.
//!
//! Layout, top to bottom:
//! - Header with the application title
//! - Search row: search box, price filter button, sort picker
//! - Price filter panel (when open)
//! - Result count
//! - Loading, failure, empty, or card grid content
//! - Pagination

use iced::widget::{Space, column, container, responsive, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use estate_core::listing::{EMPTY_MESSAGE, LOAD_FAILED_MESSAGE};
use estate_core::{ListingContent, count_label, grid_columns};
use estate_model::{Property, SortOption};

use crate::component::{
    EmptyState, ErrorState, LoadingState, pagination, price_filter_button, price_filter_panel,
    property_card, search_box, sort_select,
};
use crate::message::{ListingMessage, Message, SearchMessage};
use crate::state::AppState;
use crate::theme::{CONTENT_MAX_WIDTH, EstateColors, SPACING_LG, SPACING_MD, SPACING_SM};

const SEARCH_PLACEHOLDER: &str = "Search by name, address, or price...";

fn search_message(msg: SearchMessage) -> Message {
    Message::Listing(ListingMessage::Search(msg))
}

// =============================================================================
// MAIN LISTING VIEW
// =============================================================================

/// Render the listing. The grid adapts its column count to the window width.
pub fn view_listing(state: &AppState) -> Element<'_, Message> {
    responsive(move |size| {
        let columns = grid_columns(size.width);

        let mut content = column![view_header(), view_toolbar(state)].spacing(SPACING_MD);

        if state.price_filter.is_open() {
            content = content.push(price_filter_panel(&state.price_filter));
        }

        let listing = state.catalog.content();
        if matches!(listing, ListingContent::Populated(_) | ListingContent::Empty) {
            content = content.push(view_count(state.catalog.result().total_count));
        }

        content = content.push(view_content(state, listing, columns));

        if !state.catalog.is_loading()
            && let Some(pages) = pagination(state.catalog.result(), |page| {
                Message::Listing(ListingMessage::PageSelected(page))
            })
        {
            content = content.push(container(pages).center_x(Length::Fill));
        }

        scrollable(
            container(content.max_width(CONTENT_MAX_WIDTH).padding(SPACING_LG))
                .center_x(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    })
    .into()
}

// =============================================================================
// HEADER
// =============================================================================

fn view_header<'a>() -> Element<'a, Message> {
    let icon = container(lucide::house().size(24)).style(|theme: &Theme| container::Style {
        text_color: Some(theme.extended_palette().primary.base.color),
        ..Default::default()
    });

    let subtitle = text("Find your next property")
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.estate().text_muted),
        });

    row![
        icon,
        column![text("Estate Studio").size(24), subtitle].spacing(2.0),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// TOOLBAR
// =============================================================================

fn view_toolbar(state: &AppState) -> Element<'_, Message> {
    let search = search_box(
        state.search.text(),
        SEARCH_PLACEHOLDER,
        |text| search_message(SearchMessage::Changed(text)),
        search_message(SearchMessage::Submitted),
        search_message(SearchMessage::Cleared),
    );

    let sort = sort_select(
        state.catalog.controller().sort(),
        |sort| Message::Listing(ListingMessage::SortSelected(sort)),
        Message::Listing(ListingMessage::SortSelected(SortOption::Default)),
    );

    row![search, price_filter_button(&state.price_filter), sort]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

fn view_count<'a>(total: u64) -> Element<'a, Message> {
    text(count_label(total))
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.estate().text_secondary),
        })
        .into()
}

// =============================================================================
// CONTENT
// =============================================================================

fn view_content<'a>(
    state: &'a AppState,
    listing: ListingContent<'a>,
    columns: usize,
) -> Element<'a, Message> {
    match listing {
        ListingContent::Loading => LoadingState::new("Loading properties").view(),
        ListingContent::Failed => {
            let mut error = ErrorState::new(LOAD_FAILED_MESSAGE)
                .retry(Message::Listing(ListingMessage::Retry));
            if let Some(reason) = state.catalog.failure() {
                error = error.message(reason);
            }
            error.view()
        }
        ListingContent::Empty => EmptyState::new(
            container(lucide::search_x().size(48)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.estate().text_muted),
                ..Default::default()
            }),
            EMPTY_MESSAGE,
        )
        .description("Try a different search or widen the price range")
        .view(),
        ListingContent::Populated(items) => view_grid(state, &items, columns),
    }
}

/// Cards in rows of `columns`. The last row is padded so cards keep their
/// width.
fn view_grid<'a>(
    state: &'a AppState,
    items: &[&'a Property],
    columns: usize,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let rows = items.chunks(columns).map(|chunk| -> Element<'a, Message> {
        let mut cells = row![].spacing(SPACING_MD);
        for &property in chunk {
            let image = property
                .primary_image()
                .and_then(|url| state.card_images.get(url));
            cells = cells.push(
                container(property_card(property, image, &state.fallback_image))
                    .width(Length::FillPortion(1)),
            );
        }
        for _ in chunk.len()..columns {
            cells = cells.push(Space::new().width(Length::FillPortion(1)));
        }
        cells.into()
    });

    column(rows).spacing(SPACING_MD).into()
}
