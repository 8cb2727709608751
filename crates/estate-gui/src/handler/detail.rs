//! Detail view message handler.
//!
//! Applies the property response to the detail state machine and loads each
//! photo independently. Responses for a property that is no longer on screen
//! are dropped.

use std::sync::Arc;

use iced::Task;

use super::MessageHandler;
use crate::message::{DetailMessage, Message};
use crate::service::fetch_photo;
use crate::state::AppState;

/// Handler for detail view messages.
pub struct DetailHandler;

impl MessageHandler<DetailMessage> for DetailHandler {
    fn handle(&self, state: &mut AppState, msg: DetailMessage) -> Task<Message> {
        let source = Arc::clone(&state.source);
        let Some(detail) = state.view.detail_mut() else {
            tracing::debug!("Detail response arrived after leaving the view");
            return Task::none();
        };

        match msg {
            DetailMessage::Loaded { request, result } => {
                let Some(images) = detail.apply(request, result.map_err(|err| err.user_message()))
                else {
                    return Task::none();
                };
                tracing::debug!(id = detail.id(), photos = images.len(), "Property loaded");

                Task::batch(images.into_iter().map(|image| {
                    let key = image.key;
                    Task::perform(fetch_photo(Arc::clone(&source), image.url), move |result| {
                        Message::Detail(DetailMessage::ImageLoaded {
                            request,
                            key,
                            result,
                        })
                    })
                }))
            }

            DetailMessage::ImageLoaded {
                request,
                key,
                result,
            } => {
                match result {
                    Ok(handle) => {
                        detail.image_loaded(request, key, handle);
                    }
                    Err(err) => {
                        tracing::debug!(%err, "Photo failed to load");
                        detail.image_failed(request, key);
                    }
                }
                Task::none()
            }
        }
    }
}
