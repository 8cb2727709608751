//! Property detail view.
//!
//! - Loading: spinner only
//! - Failed: a generic failure message with a way back
//! - Loaded: photos, price, facts, owner, and transaction history

use iced::widget::image::Handle;
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use estate_core::detail::DETAIL_FAILED_MESSAGE;
use estate_core::{
    CardText, DetailState, DetailStatus, ImageKey, Route, format_date, format_price_usd,
};
use estate_model::{Owner, Property, PropertyTrace};

use crate::component::{ErrorState, LoadingState, photo};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, CONTENT_MAX_WIDTH, EstateColors, HERO_IMAGE_HEIGHT,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, THUMBNAIL_HEIGHT, button_ghost,
    button_secondary, container_card,
};

const BACK_LABEL: &str = "Back to listing";

/// Thumbnails per gallery row.
const GALLERY_COLUMNS: usize = 4;

// =============================================================================
// MAIN DETAIL VIEW
// =============================================================================

/// Render the detail view for the given state.
pub fn view_detail<'a>(
    state: &'a AppState,
    detail: &'a DetailState<Handle>,
) -> Element<'a, Message> {
    match detail.status() {
        DetailStatus::Loading => LoadingState::spinner().centered().view(),
        DetailStatus::Failed => failed_state().view(),
        DetailStatus::Loaded(property) => view_loaded(state, detail, property),
    }
}

fn failed_state() -> ErrorState<Message> {
    ErrorState::new(DETAIL_FAILED_MESSAGE).action(BACK_LABEL, Message::Navigate(Route::Listing))
}

fn back_button<'a>() -> Element<'a, Message> {
    button(
        row![lucide::arrow_left().size(14), text(BACK_LABEL).size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Navigate(Route::Listing))
    .padding([6.0, 10.0])
    .style(button_ghost)
    .into()
}

// =============================================================================
// LOADED
// =============================================================================

fn view_loaded<'a>(
    state: &'a AppState,
    detail: &'a DetailState<Handle>,
    property: &'a Property,
) -> Element<'a, Message> {
    let fallback = &state.fallback_image;

    let share = button(
        row![lucide::external_link().size(14), text("Open in browser").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::OpenInBrowser(detail.share_url(&state.config.app_url)))
    .padding([6.0, 12.0])
    .style(button_secondary);

    let toolbar = row![back_button(), Space::new().width(Length::Fill), share]
        .align_y(Alignment::Center);

    let mut content = column![
        toolbar,
        view_title(property),
        photo(Some(detail.image(ImageKey::Primary)), fallback, HERO_IMAGE_HEIGHT),
    ]
    .spacing(SPACING_MD);

    if detail.gallery_len() > 0 {
        content = content.push(view_gallery(detail, fallback));
    }

    content = content.push(view_facts(property));

    if detail.shows_owner()
        && let Some(owner) = &property.owner
    {
        content = content.push(view_owner(owner, detail, fallback));
    }

    if detail.shows_traces() {
        content = content.push(view_traces(property.traces()));
    }

    scrollable(
        container(content.max_width(CONTENT_MAX_WIDTH).padding(SPACING_LG))
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn view_title(property: &Property) -> Element<'_, Message> {
    let card = CardText::new(property);
    let address = row![
        container(lucide::house().size(14)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.estate().text_muted),
            ..Default::default()
        }),
        text(card.address)
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.estate().text_secondary),
            }),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    column![text(card.name).size(28), address]
        .spacing(SPACING_XS)
        .into()
}

fn view_gallery<'a>(detail: &'a DetailState<Handle>, fallback: &Handle) -> Element<'a, Message> {
    let thumbnails: Vec<Element<'a, Message>> = (0..detail.gallery_len())
        .map(|index| {
            container(photo(
                Some(detail.image(ImageKey::Gallery(index))),
                fallback,
                THUMBNAIL_HEIGHT,
            ))
            .width(Length::FillPortion(1))
            .into()
        })
        .collect();

    let mut rows = column![].spacing(SPACING_SM);
    let mut thumbnails = thumbnails.into_iter().peekable();
    while thumbnails.peek().is_some() {
        let mut cells = row![].spacing(SPACING_SM);
        for _ in 0..GALLERY_COLUMNS {
            cells = match thumbnails.next() {
                Some(thumbnail) => cells.push(thumbnail),
                None => cells.push(Space::new().width(Length::FillPortion(1))),
            };
        }
        rows = rows.push(cells);
    }
    rows.into()
}

// =============================================================================
// SECTIONS
// =============================================================================

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(16), body].spacing(SPACING_SM))
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(container_card)
        .into()
}

fn fact<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![
        text(label).size(11).style(|theme: &Theme| text::Style {
            color: Some(theme.estate().text_muted),
        }),
        text(value).size(14),
    ]
    .spacing(2.0)
    .width(Length::FillPortion(1))
    .into()
}

fn view_facts(property: &Property) -> Element<'_, Message> {
    let price = text(format_price_usd(property.price))
        .size(26)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.estate().price),
        });

    let facts = row![
        fact("Year built", property.year.to_string()),
        fact("Internal code", property.code_internal.clone()),
    ]
    .spacing(SPACING_MD);

    section("Overview", column![price, facts].spacing(SPACING_SM).into())
}

fn view_owner<'a>(
    owner: &'a Owner,
    detail: &'a DetailState<Handle>,
    fallback: &Handle,
) -> Element<'a, Message> {
    let avatar = container(photo(
        Some(detail.image(ImageKey::OwnerPhoto)),
        fallback,
        AVATAR_SIZE,
    ))
    .width(Length::Fixed(AVATAR_SIZE))
    .height(Length::Fixed(AVATAR_SIZE))
    .clip(true)
    .style(|_theme: &Theme| container::Style {
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let body = row![
        avatar,
        column![
            text(&owner.name).size(15),
            text("Owner").size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.estate().text_muted),
            }),
        ]
        .spacing(2.0),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center);

    section("Owner", body.into())
}

fn view_traces(traces: &[PropertyTrace]) -> Element<'_, Message> {
    let header = row![
        trace_cell("Transaction", true),
        trace_cell("Date", true),
        trace_cell("Value", true),
        trace_cell("Tax", true),
    ]
    .spacing(SPACING_SM);

    let rows = traces.iter().map(|trace| -> Element<'_, Message> {
        row![
            trace_cell(trace.name.clone(), false),
            trace_cell(format_date(&trace.date_sale), false),
            trace_cell(format_price_usd(trace.value), false),
            trace_cell(format_price_usd(trace.tax), false),
        ]
        .spacing(SPACING_SM)
        .into()
    });

    section(
        "Transaction history",
        column![header].extend(rows).spacing(SPACING_SM).into(),
    )
}

fn trace_cell<'a>(value: impl Into<String>, heading: bool) -> Element<'a, Message> {
    let value: String = value.into();
    text(value)
        .size(if heading { 11 } else { 13 })
        .style(move |theme: &Theme| text::Style {
            color: Some(if heading {
                theme.estate().text_muted
            } else {
                theme.extended_palette().background.base.text
            }),
        })
        .width(Length::FillPortion(1))
        .into()
}
