//! Navigation between the listing and detail views.

use std::sync::Arc;

use iced::Task;

use estate_core::{DetailState, Route};

use super::{MessageHandler, refresh_listing};
use crate::message::{DetailMessage, Message};
use crate::service::fetch_property;
use crate::state::{AppState, ViewState};

/// Handler for route changes.
///
/// The listing state survives a visit to a property, and a failed listing is
/// reloaded on return. Entering a detail view
/// always starts a fresh request; leaving it drops the detail state, so any
/// response still in flight is ignored.
pub struct NavigationHandler;

impl MessageHandler<Route> for NavigationHandler {
    fn handle(&self, state: &mut AppState, route: Route) -> Task<Message> {
        tracing::info!(from = %state.view.route(), to = %route, "Navigating");
        state.price_filter.close();

        match route {
            Route::Listing => {
                state.view = ViewState::Listing;
                if state.catalog.needs_retry() {
                    refresh_listing(state)
                } else {
                    Task::none()
                }
            }

            Route::Detail(id) => {
                let request = state.detail_requests.issue();
                state.view = ViewState::Detail(DetailState::new(id.clone(), request));
                tracing::debug!(%request, %id, "Issuing property request");

                Task::perform(
                    fetch_property(Arc::clone(&state.source), id),
                    move |result| Message::Detail(DetailMessage::Loaded { request, result }),
                )
            }
        }
    }
}
