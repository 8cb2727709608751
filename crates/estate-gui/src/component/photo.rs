//! Remote photo with placeholder and fallback.

use iced::widget::image::Handle;
use iced::widget::{Space, container, image};
use iced::{ContentFit, Element, Length};

use estate_core::ImageSlot;

use crate::theme::container_surface;

/// Render one photo slot at a fixed height.
///
/// A pending slot shows an empty surface; a missing slot or a failed load
/// shows `fallback`.
pub fn photo<'a, M: 'a>(
    slot: Option<&ImageSlot<Handle>>,
    fallback: &Handle,
    height: f32,
) -> Element<'a, M> {
    let handle = match slot {
        Some(ImageSlot::Pending) => {
            return container(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .style(container_surface)
                .into();
        }
        Some(ImageSlot::Ready(handle)) => handle.clone(),
        Some(ImageSlot::Fallback) | None => fallback.clone(),
    };

    container(
        image(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(height)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .clip(true)
    .into()
}
