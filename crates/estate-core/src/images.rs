//! Per-image load state with fallback substitution.
//!
//! Each displayed image has its own slot. A missing URL or a failed load puts
//! that slot, and only that slot, into [`ImageSlot::Fallback`].

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Load state of one displayed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot<T> {
    /// Fetch in flight.
    Pending,
    /// Decoded image ready for display.
    Ready(T),
    /// Show the fallback asset instead.
    Fallback,
}

impl<T> ImageSlot<T> {
    /// Whether the fallback asset is shown.
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    /// The loaded image, if any.
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(image) => Some(image),
            _ => None,
        }
    }
}

/// Image slots keyed by their position in a view.
#[derive(Debug, Clone)]
pub struct ImageStore<K, T> {
    slots: HashMap<K, ImageSlot<T>>,
}

impl<K, T> Default for ImageStore<K, T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, T> ImageStore<K, T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image slot.
    ///
    /// Returns the URL to fetch when the slot is new and has a usable URL. A
    /// blank or missing URL goes straight to the fallback asset.
    pub fn track(&mut self, key: K, url: Option<&str>) -> Option<String> {
        if self.slots.contains_key(&key) {
            return None;
        }
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => {
                self.slots.insert(key, ImageSlot::Pending);
                Some(url.to_string())
            }
            None => {
                self.slots.insert(key, ImageSlot::Fallback);
                None
            }
        }
    }

    /// Record a successful load. Returns `false` when the slot is no longer
    /// tracked.
    pub fn loaded(&mut self, key: K, image: T) -> bool {
        self.set(&key, ImageSlot::Ready(image))
    }

    /// Record a failed load. Other slots are untouched.
    pub fn failed(&mut self, key: K) -> bool {
        self.set(&key, ImageSlot::Fallback)
    }

    fn set(&mut self, key: &K, state: ImageSlot<T>) -> bool {
        match self.slots.get_mut(key) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }

    /// Keep only the slots whose key passes `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.slots.retain(|key, _| keep(key));
    }

    /// State of a slot, `None` when never tracked.
    pub fn get<Q>(&self, key: &Q) -> Option<&ImageSlot<T>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(key)
    }

    /// Number of tracked slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is tracked.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Forget every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_uses_fallback() {
        let mut store: ImageStore<u8, ()> = ImageStore::new();
        assert_eq!(store.track(1, None), None);
        assert_eq!(store.track(2, Some("  ")), None);
        assert!(store.get(&1).is_some_and(ImageSlot::is_fallback));
        assert!(store.get(&2).is_some_and(ImageSlot::is_fallback));
    }

    #[test]
    fn test_slots_are_tracked_once() {
        let mut store: ImageStore<u8, ()> = ImageStore::new();
        assert_eq!(store.track(1, Some("https://img/a.jpg")).as_deref(), Some("https://img/a.jpg"));
        assert_eq!(store.track(1, Some("https://img/a.jpg")), None);
        assert_eq!(store.get(&1), Some(&ImageSlot::Pending));
    }

    #[test]
    fn test_failure_is_per_slot() {
        let mut store = ImageStore::new();
        let _ = store.track("a", Some("https://img/a.jpg"));
        let _ = store.track("b", Some("https://img/b.jpg"));
        store.loaded("a", 7);
        store.failed("b");
        assert_eq!(store.get(&"a").and_then(ImageSlot::ready), Some(&7));
        assert!(store.get(&"b").is_some_and(ImageSlot::is_fallback));
    }

    #[test]
    fn test_results_for_dropped_slots_are_ignored() {
        let mut store = ImageStore::new();
        let _ = store.track("a", Some("https://img/a.jpg"));
        let _ = store.track("b", Some("https://img/b.jpg"));
        store.retain(|key| *key == "b");

        assert!(!store.loaded("a", 1));
        assert!(!store.failed("a"));
        assert!(store.get(&"a").is_none());
        assert!(store.loaded("b", 2));
        assert_eq!(store.len(), 1);
    }
}
