//! Price range filter: toggle button and panel.
//!
//! The panel holds two range sliders that commit on release, and two
//! spinners (text input plus step buttons) that commit at once.

use iced::widget::{Space, button, column, container, row, slider, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use estate_core::{
    MAX_PRICE, MIN_PRICE, PRICE_STEP, PriceFilter, format_price, parse_price_input,
};

use crate::message::{ListingMessage, Message, PriceFilterMessage};
use crate::theme::{
    EstateColors, FILTER_PANEL_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost,
    button_secondary, container_popover, text_input_default, text_input_invalid,
};

fn price_message(msg: PriceFilterMessage) -> Message {
    Message::Listing(ListingMessage::PriceFilter(msg))
}

// =============================================================================
// TOGGLE BUTTON
// =============================================================================

/// Funnel button opening the panel. Highlighted while a range is committed.
pub fn price_filter_button<'a>(filter: &PriceFilter) -> Element<'a, Message> {
    let active = filter.has_filters();
    let icon = container(lucide::funnel().size(14)).style(move |theme: &Theme| {
        let color = if active {
            theme.extended_palette().primary.base.color
        } else {
            theme.estate().text_muted
        };
        container::Style {
            text_color: Some(color),
            ..Default::default()
        }
    });

    button(
        row![icon, text("Price").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(price_message(PriceFilterMessage::Toggled))
    .padding([8.0, 12.0])
    .style(button_secondary)
    .into()
}

// =============================================================================
// PANEL
// =============================================================================

/// The open filter panel.
pub fn price_filter_panel<'a>(filter: &'a PriceFilter) -> Element<'a, Message> {
    let (low, high) = filter.preview();

    let header = row![
        text("Price range").size(14),
        Space::new().width(Length::Fill),
        button(lucide::x().size(14))
            .on_press(price_message(PriceFilterMessage::Closed))
            .padding([4.0, 6.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let preview = text(format!("{} to {}", format_price(low), format_price(high)))
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.estate().text_secondary),
        });

    let low_slider = slider(MIN_PRICE..=MAX_PRICE, low, |value| {
        price_message(PriceFilterMessage::LowDragged(value))
    })
    .step(PRICE_STEP)
    .on_release(price_message(PriceFilterMessage::Released));

    let high_slider = slider(MIN_PRICE..=MAX_PRICE, high, |value| {
        price_message(PriceFilterMessage::HighDragged(value))
    })
    .step(PRICE_STEP)
    .on_release(price_message(PriceFilterMessage::Released));

    let spinners = row![
        spinner(
            "Min",
            filter.min_text(),
            PriceFilterMessage::MinTextChanged,
            PriceFilterMessage::MinStepped,
        ),
        spinner(
            "Max",
            filter.max_text(),
            PriceFilterMessage::MaxTextChanged,
            PriceFilterMessage::MaxStepped,
        ),
    ]
    .spacing(SPACING_SM);

    let clear = button(text("Clear filters").size(13))
        .on_press_maybe(
            filter
                .has_filters()
                .then(|| price_message(PriceFilterMessage::Cleared)),
        )
        .padding([6.0, 12.0])
        .style(button_secondary);

    container(
        column![
            header,
            preview,
            labeled("Minimum", low_slider.into()),
            labeled("Maximum", high_slider.into()),
            spinners,
            row![Space::new().width(Length::Fill), clear],
        ]
        .spacing(SPACING_SM),
    )
    .width(Length::Fixed(FILTER_PANEL_WIDTH))
    .padding(SPACING_MD)
    .style(container_popover)
    .into()
}

fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    column![
        text(label).size(11).style(|theme: &Theme| text::Style {
            color: Some(theme.estate().text_muted),
        }),
        control,
    ]
    .spacing(SPACING_XS)
    .into()
}

/// Text input with step down/up buttons. Unparseable text is outlined.
fn spinner<'a>(
    placeholder: &'a str,
    value: &'a str,
    on_change: fn(String) -> PriceFilterMessage,
    on_step: fn(i32) -> PriceFilterMessage,
) -> Element<'a, Message> {
    let style: fn(&Theme, text_input::Status) -> text_input::Style =
        if parse_price_input(value).is_err() {
            text_input_invalid
        } else {
            text_input_default
        };

    let input = text_input(placeholder, value)
        .on_input(move |text| price_message(on_change(text)))
        .padding([6.0, 8.0])
        .size(13)
        .width(Length::Fill)
        .style(style);

    row![
        button(lucide::minus().size(12))
            .on_press(price_message(on_step(-1)))
            .padding([6.0, 6.0])
            .style(button_ghost),
        input,
        button(lucide::plus().size(12))
            .on_press(price_message(on_step(1)))
            .padding([6.0, 6.0])
            .style(button_ghost),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .width(Length::FillPortion(1))
    .into()
}
