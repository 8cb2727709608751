//! Detail view messages.

use iced::widget::image::Handle;

use estate_core::{ImageKey, RequestId};
use estate_model::Property;

use crate::error::GuiError;

/// Messages for the property detail view.
#[derive(Debug, Clone)]
pub enum DetailMessage {
    /// The property request completed
    Loaded {
        request: RequestId,
        result: Result<Property, GuiError>,
    },

    /// One of the property photos finished loading
    ImageLoaded {
        request: RequestId,
        key: ImageKey,
        result: Result<Handle, GuiError>,
    },
}
