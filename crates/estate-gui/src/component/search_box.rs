//! Search box component.
//!
//! A text input with search icon, submit on Enter, and clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, EstateColors, button_ghost, text_input_default};

// =============================================================================
// SEARCH BOX
// =============================================================================

/// Creates a search input with clear button.
///
/// # Arguments
///
/// * `value` - Current search text
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for text changes
/// * `on_submit` - Message sent when Enter is pressed
/// * `on_clear` - Message sent when the clear button is clicked
///
/// # Example
///
/// ```rust,ignore
/// use estate_gui::component::search_box;
///
/// let search = search_box(
///     state.search.text(),
///     "Search by name, address, or price...",
///     |text| Message::Listing(ListingMessage::Search(SearchMessage::Changed(text))),
///     Message::Listing(ListingMessage::Search(SearchMessage::Submitted)),
///     Message::Listing(ListingMessage::Search(SearchMessage::Cleared)),
/// );
/// ```
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_submit: M,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(14)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.estate().text_muted),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .on_submit(on_submit)
        .padding(Padding::new(8.0).left(4.0))
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(32.0))
            .center_x(Length::Shrink),
        input,
    ]
    .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(
                container(lucide::x().size(16)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.estate().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button_ghost),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let colors = theme.estate();
            container::Style {
                background: Some(colors.background_elevated.into()),
                border: Border {
                    color: colors.border_default,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
