//! Pagination controls for the listing.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Theme};
use iced_fonts::lucide;

use estate_core::PageItem;
use estate_core::listing::{page_items, range_label};
use estate_model::PaginatedResult;

use crate::theme::{
    BORDER_RADIUS_SM, EstateColors, SPACING_SM, SPACING_XS, button_ghost, button_page,
};

// =============================================================================
// PAGINATION CONTROLS
// =============================================================================

/// Previous/next buttons, numbered pages, and a range summary.
///
/// Returns `None` when everything fits on one page.
pub fn pagination<'a, M: Clone + 'a>(
    page: &PaginatedResult,
    on_select: impl Fn(u32) -> M,
) -> Option<Element<'a, M>> {
    if page.total_pages <= 1 {
        return None;
    }

    let current = page.page;

    let prev_button = button(lucide::chevron_left().size(14))
        .on_press_maybe(
            page.has_previous_page
                .then(|| on_select(current.saturating_sub(1))),
        )
        .padding([6.0, 8.0])
        .style(button_ghost);

    let next_button = button(lucide::chevron_right().size(14))
        .on_press_maybe(page.has_next_page.then(|| on_select(current + 1)))
        .padding([6.0, 8.0])
        .style(button_ghost);

    let pages = page_items(current, page.total_pages)
        .into_iter()
        .map(|item| -> Element<'a, M> {
            match item {
                PageItem::Page(number) => button(text(number.to_string()).size(13))
                    .on_press(on_select(number))
                    .padding([6.0, 10.0])
                    .style(button_page(number == current))
                    .into(),
                PageItem::Ellipsis => container(text("...").size(13).style(|theme: &Theme| {
                    text::Style {
                        color: Some(theme.estate().text_muted),
                    }
                }))
                .padding([6.0, 4.0])
                .into(),
            }
        });

    let summary = container(text(range_label(page)).size(12).style(|theme: &Theme| {
        text::Style {
            color: Some(theme.estate().text_secondary),
        }
    }))
    .padding([6.0, 12.0])
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
    });

    Some(
        row![
            prev_button,
            row(pages).spacing(SPACING_XS).align_y(Alignment::Center),
            next_button,
            Space::new().width(SPACING_SM),
            summary,
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into(),
    )
}
