//! Empty, loading, and error state components.
//!
//! # Usage
//!
//! ```rust,ignore
//! use estate_gui::component::{EmptyState, ErrorState, LoadingState};
//! use iced_fonts::lucide;
//!
//! EmptyState::new(lucide::search_x().size(48), "No properties found")
//!     .description("Try a different search or widen the price range")
//!     .view();
//!
//! LoadingState::new("Loading properties").centered().view();
//!
//! ErrorState::new("Could not load properties")
//!     .message(&failure)
//!     .retry(Message::Listing(ListingMessage::Retry))
//!     .view();
//!
//! ErrorState::new("Could not load the property")
//!     .action("Back to listing", Message::Navigate(Route::Listing))
//!     .view();
//! ```

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_SM, EstateColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL,
    button_primary,
};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, and optional description.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let title_text = text(self.title)
            .size(16)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.estate().text_secondary),
            });

        let mut content = column![self.icon, Space::new().height(SPACING_MD), title_text];

        if let Some(desc) = self.description {
            content =
                content
                    .push(Space::new().height(SPACING_SM))
                    .push(text(desc).size(13).style(|theme: &Theme| text::Style {
                        color: Some(theme.estate().text_muted),
                    }));
        }

        container(content.align_x(Alignment::Center))
            .width(Length::Fill)
            .padding([SPACING_XL * 2.0, 0.0])
            .center_x(Length::Fill)
            .into()
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading state with spinner and optional title.
pub struct LoadingState {
    title: Option<String>,
    centered: bool,
}

impl LoadingState {
    /// Create a loading state with a title under the spinner.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            centered: false,
        }
    }

    /// Create a loading state showing the spinner only.
    pub fn spinner() -> Self {
        Self {
            title: None,
            centered: false,
        }
    }

    /// Center the content in a full-size container.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Build the element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let icon = container(lucide::loader().size(40)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.extended_palette().primary.base.color),
            ..Default::default()
        });

        let mut content = column![icon].align_x(Alignment::Center);

        if let Some(title) = self.title {
            content = content.push(Space::new().height(SPACING_LG)).push(
                text(title).size(16).style(|theme: &Theme| text::Style {
                    color: Some(theme.estate().text_secondary),
                }),
            );
        }

        if self.centered {
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            container(content)
                .width(Length::Fill)
                .padding([SPACING_XL * 2.0, 0.0])
                .center_x(Length::Fill)
                .into()
        }
    }
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// Error state with message and optional action.
pub struct ErrorState<M> {
    title: String,
    message: Option<String>,
    action: Option<(String, M)>,
}

impl<M: Clone> ErrorState<M> {
    /// Create a new error state with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            action: None,
        }
    }

    /// Set the error message (shown in a container).
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Message sent by the action button, if any.
    pub fn action_message(&self) -> Option<&M> {
        self.action.as_ref().map(|(_, message)| message)
    }

    /// Add a "Try again" button.
    pub fn retry(self, message: M) -> Self {
        self.action("Try again", message)
    }

    /// Build the element.
    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let error_icon =
            container(lucide::circle_alert().size(48)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.extended_palette().danger.base.color),
                ..Default::default()
            });

        let title_text = text(self.title)
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            });

        let mut content = column![error_icon, Space::new().height(SPACING_LG), title_text]
            .align_x(Alignment::Center)
            .max_width(400.0);

        if let Some(msg) = self.message {
            let msg_text = text(msg).size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.estate().text_muted),
            });
            content = content.push(Space::new().height(SPACING_SM)).push(
                container(msg_text)
                    .padding(SPACING_MD)
                    .style(|theme: &Theme| container::Style {
                        background: Some(theme.estate().background_secondary.into()),
                        border: Border {
                            radius: BORDER_RADIUS_SM.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            );
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text(label).size(14))
                    .on_press(message)
                    .padding([10.0, 24.0])
                    .style(button_primary),
            );
        }

        container(content)
            .width(Length::Fill)
            .padding([SPACING_XL * 2.0, 0.0])
            .center_x(Length::Fill)
            .into()
    }
}
