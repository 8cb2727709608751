//! Property card shown in the listing grid.

use iced::widget::image::Handle;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use estate_core::{CardText, ImageSlot, Route};
use estate_model::Property;

use super::photo;
use crate::message::Message;
use crate::theme::{CARD_IMAGE_HEIGHT, EstateColors, SPACING_MD, SPACING_XS, button_card};

/// A clickable card that opens the property's detail view.
pub fn property_card<'a>(
    property: &'a Property,
    image: Option<&ImageSlot<Handle>>,
    fallback: &Handle,
) -> Element<'a, Message> {
    let card = CardText::new(property);

    let name = text(card.name).size(16).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.base.text),
    });

    let address = row![
        container(lucide::house().size(12)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.estate().text_muted),
            ..Default::default()
        }),
        Space::new().width(SPACING_XS),
        text(card.address)
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.estate().text_secondary),
            }),
    ]
    .align_y(Alignment::Center);

    let price = text(card.price).size(18).style(|theme: &Theme| text::Style {
        color: Some(theme.estate().price),
    });

    let body = column![name, address, Space::new().height(SPACING_XS), price]
        .spacing(SPACING_XS)
        .padding(SPACING_MD);

    button(column![photo(image, fallback, CARD_IMAGE_HEIGHT), body])
        .on_press(Message::Navigate(Route::detail(card.id)))
        .padding(0)
        .width(Length::Fill)
        .style(button_card)
        .into()
}
