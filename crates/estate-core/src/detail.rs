//! Detail view state machine.
//!
//! `Loading` moves to `Failed` or `Loaded` exactly once, driven by the fetch
//! result for the request this state was created with. Images of a loaded
//! property each fall back independently.

use tracing::debug;

use estate_model::Property;

use crate::images::{ImageSlot, ImageStore};
use crate::request::RequestId;
use crate::route::Route;

/// Generic failure text of the detail view.
pub const DETAIL_FAILED_MESSAGE: &str = "Could not load the property";

/// Position of an image in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKey {
    /// Large image at the top.
    Primary,
    /// Secondary image at the given gallery position (0-based).
    Gallery(usize),
    /// Owner portrait.
    OwnerPhoto,
}

/// An image to fetch for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Slot the result belongs to.
    pub key: ImageKey,
    /// Image URL.
    pub url: String,
}

/// Phase of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    /// Fetch in flight.
    Loading,
    /// Fetch failed or the property does not exist.
    Failed,
    /// Property received.
    Loaded(Box<Property>),
}

/// State of the detail view for one property id.
#[derive(Debug, Clone)]
pub struct DetailState<T> {
    id: String,
    request: RequestId,
    status: DetailStatus,
    images: ImageStore<ImageKey, T>,
    fallback: ImageSlot<T>,
}

impl<T> DetailState<T> {
    /// Start loading `id` under the given request tag.
    pub fn new(id: impl Into<String>, request: RequestId) -> Self {
        Self {
            id: id.into(),
            request,
            status: DetailStatus::Loading,
            images: ImageStore::new(),
            fallback: ImageSlot::Fallback,
        }
    }

    /// Property identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Request tag of the fetch this state waits for.
    pub fn request(&self) -> RequestId {
        self.request
    }

    /// Current phase.
    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    /// Loaded property, if any.
    pub fn property(&self) -> Option<&Property> {
        match &self.status {
            DetailStatus::Loaded(property) => Some(&**property),
            _ => None,
        }
    }

    /// Apply the fetch result.
    ///
    /// Returns `None` when the response belongs to another request or the
    /// state already left `Loading`. Otherwise returns the images to fetch.
    pub fn apply(
        &mut self,
        request: RequestId,
        result: Result<Property, String>,
    ) -> Option<Vec<ImageRequest>> {
        if request != self.request || self.status != DetailStatus::Loading {
            debug!(request = %request, id = %self.id, "Discarding stale property response");
            return None;
        }

        match result {
            Ok(property) => {
                let requests = self.track_images(&property);
                self.status = DetailStatus::Loaded(Box::new(property));
                Some(requests)
            }
            Err(message) => {
                debug!(id = %self.id, error = %message, "Property detail failed");
                self.status = DetailStatus::Failed;
                Some(Vec::new())
            }
        }
    }

    /// Slot of an image. Untracked keys show the fallback.
    pub fn image(&self, key: ImageKey) -> &ImageSlot<T> {
        self.images.get(&key).unwrap_or(&self.fallback)
    }

    /// Record a decoded image. Results for other requests are ignored.
    pub fn image_loaded(&mut self, request: RequestId, key: ImageKey, image: T) -> bool {
        if request != self.request {
            return false;
        }
        self.images.loaded(key, image);
        true
    }

    /// Record a failed image load. Only that slot switches to the fallback.
    pub fn image_failed(&mut self, request: RequestId, key: ImageKey) -> bool {
        if request != self.request {
            return false;
        }
        debug!(id = %self.id, ?key, "Image failed to load, using fallback");
        self.images.failed(key);
        true
    }

    /// Number of gallery images.
    pub fn gallery_len(&self) -> usize {
        self.property().map_or(0, |p| p.secondary_images().len())
    }

    /// Whether the owner section is shown.
    pub fn shows_owner(&self) -> bool {
        self.property().is_some_and(|p| p.owner.is_some())
    }

    /// Whether the transaction history section is shown.
    pub fn shows_traces(&self) -> bool {
        self.property().is_some_and(Property::has_traces)
    }

    /// Public web address of this property.
    pub fn share_url(&self, app_url: &str) -> String {
        Route::Detail(self.id.clone()).url(app_url)
    }

    fn track_images(&mut self, property: &Property) -> Vec<ImageRequest> {
        let mut requests = Vec::new();
        let mut track = |key: ImageKey, url: Option<&str>| {
            if let Some(url) = self.images.track(key, url) {
                requests.push(ImageRequest { key, url });
            }
        };

        track(ImageKey::Primary, property.primary_image());
        for (index, url) in property.secondary_images().iter().enumerate() {
            track(ImageKey::Gallery(index), Some(url));
        }
        if let Some(owner) = &property.owner {
            track(ImageKey::OwnerPhoto, Some(&owner.photo));
        }
        requests
    }
}
