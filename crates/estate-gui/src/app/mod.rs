//! Main application module for Estate Studio.
//!
//! The application follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Use `Task::perform` for async operations
//! - **View state is part of ViewState enum** - The listing lives beside it

mod subscription;

use std::sync::Arc;

use iced::keyboard::{self, key::Named};
use iced::window;
use iced::{Element, Subscription, Task, Theme};

use estate_client::PropertySource;
use estate_core::{DetailStatus, Route};

use crate::config::AppConfig;
use crate::error::GuiError;
use crate::handler::{
    DetailHandler, ListingHandler, MessageHandler, NavigationHandler, refresh_listing,
};
use crate::message::Message;
use crate::state::{AppState, ViewState};
use crate::theme::estate_theme;
use crate::view::{view_detail, view_listing};

const APP_NAME: &str = "Estate Studio";

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// The first catalog page is requested at once, whatever the start route,
    /// so going back from a property shows a loaded listing.
    pub fn new(
        config: AppConfig,
        source: Arc<dyn PropertySource>,
        start: Route,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::new(config, source),
        };

        let listing = refresh_listing(&mut app.state);
        let startup = match start {
            Route::Listing => listing,
            route @ Route::Detail(_) => {
                Task::batch([listing, NavigationHandler.handle(&mut app.state, route)])
            }
        };

        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(route) => NavigationHandler.handle(&mut self.state, route),

            Message::OpenInBrowser(url) => {
                if let Err(err) = open::that(&url) {
                    let err = GuiError::OpenBrowser {
                        url,
                        reason: err.to_string(),
                    };
                    tracing::warn!(%err, "Failed to open browser");
                }
                Task::none()
            }

            // =================================================================
            // View messages
            // =================================================================
            Message::Listing(msg) => ListingHandler.handle(&mut self.state, msg),

            Message::Detail(msg) => DetailHandler.handle(&mut self.state, msg),

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => self.handle_key(&key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    /// Escape closes the price panel, or leaves the detail view.
    fn handle_key(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if !modifiers.is_empty() || *key != keyboard::Key::Named(Named::Escape) {
            return Task::none();
        }

        match self.state.view {
            ViewState::Detail(_) => NavigationHandler.handle(&mut self.state, Route::Listing),
            ViewState::Listing => {
                self.state.price_filter.close();
                Task::none()
            }
        }
    }

    /// Render the current view.
    pub fn view(&self) -> Element<'_, Message> {
        match &self.state.view {
            ViewState::Listing => view_listing(&self.state),
            ViewState::Detail(detail) => view_detail(&self.state, detail),
        }
    }

    /// Window title: the property name on a loaded detail view.
    pub fn title(&self) -> String {
        match &self.state.view {
            ViewState::Detail(detail) => match detail.status() {
                DetailStatus::Loaded(property) if !property.name.trim().is_empty() => {
                    format!("{} - {APP_NAME}", property.name)
                }
                _ => APP_NAME.to_string(),
            },
            ViewState::Listing => APP_NAME.to_string(),
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        estate_theme(self.state.config.theme_mode)
    }

    /// Event sources.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription()
    }
}

/// Load the window icon.
pub fn load_app_icon() -> Option<window::Icon> {
    let icon_data = include_bytes!("../../assets/icon.png");
    window::icon::from_file_data(icon_data, Some(image::ImageFormat::Png)).ok()
}
