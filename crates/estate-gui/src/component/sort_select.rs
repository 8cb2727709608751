//! Sort order picker.

use iced::widget::{button, container, pick_list, row};
use iced::{Alignment, Element, Theme};
use iced_fonts::lucide;

use estate_model::SortOption;

use crate::theme::{EstateColors, SPACING_XS, button_ghost};

/// Picker over the selectable sort orders, with a reset button while one is
/// chosen. Server order shows the placeholder.
pub fn sort_select<'a, M: Clone + 'a>(
    current: SortOption,
    on_select: impl Fn(SortOption) -> M + 'a,
    on_reset: M,
) -> Element<'a, M> {
    let selected = (current != SortOption::Default).then_some(current);

    let picker = pick_list(SortOption::SELECTABLE, selected, on_select)
        .placeholder("Sort by")
        .padding([8.0, 12.0])
        .text_size(13);

    let mut content = row![picker].spacing(SPACING_XS).align_y(Alignment::Center);

    if selected.is_some() {
        content = content.push(
            button(
                container(lucide::x().size(14)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.estate().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_reset)
            .padding([4.0, 6.0])
            .style(button_ghost),
        );
    }

    content.into()
}
