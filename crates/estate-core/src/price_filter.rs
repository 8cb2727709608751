//! Price range sub-filter of the search bar.
//!
//! Two range handles preview continuously while dragged and commit on
//! release. Two spinner inputs set each bound directly and commit at once.
//! A bound sitting on the global extreme of its side is reported as absent,
//! so the full span means "no price filter".

use tracing::debug;

use crate::controller::PriceBounds;
use crate::format::{format_price_input, parse_price_input};

/// Lowest selectable price.
pub const MIN_PRICE: f64 = 0.0;

/// Highest selectable price.
pub const MAX_PRICE: f64 = 1_000_000_000.0;

/// Range handle and spinner step.
pub const PRICE_STEP: f64 = 10_000_000.0;

/// State of the price range control and its spinners.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFilter {
    committed: PriceBounds,
    preview: (f64, f64),
    min_text: String,
    max_text: String,
    open: bool,
}

impl Default for PriceFilter {
    fn default() -> Self {
        Self::from_bounds(PriceBounds::default())
    }
}

impl PriceFilter {
    /// Create a filter showing the given committed bounds.
    pub fn from_bounds(bounds: PriceBounds) -> Self {
        let mut filter = Self {
            committed: bounds,
            preview: (MIN_PRICE, MAX_PRICE),
            min_text: String::new(),
            max_text: String::new(),
            open: false,
        };
        filter.sync_from_committed();
        filter
    }

    /// Last committed bounds.
    pub fn committed(&self) -> PriceBounds {
        self.committed
    }

    /// Whether any bound is committed.
    pub fn has_filters(&self) -> bool {
        !self.committed.is_unbounded()
    }

    /// Handle positions `(low, high)` shown by the range control.
    pub fn preview(&self) -> (f64, f64) {
        self.preview
    }

    /// Text of the minimum spinner.
    pub fn min_text(&self) -> &str {
        &self.min_text
    }

    /// Text of the maximum spinner.
    pub fn max_text(&self) -> &str {
        &self.max_text
    }

    /// Whether the filter panel is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show or hide the filter panel.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Hide the filter panel.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Move the low handle. Preview only; nothing is committed.
    pub fn drag_low(&mut self, value: f64) {
        self.preview.0 = snap(value).min(self.preview.1);
    }

    /// Move the high handle. Preview only; nothing is committed.
    pub fn drag_high(&mut self, value: f64) {
        self.preview.1 = snap(value).max(self.preview.0);
    }

    /// A handle was released: commit the previewed range.
    pub fn release(&mut self) -> PriceBounds {
        let (low, high) = self.preview;
        self.committed = PriceBounds {
            min: (low > MIN_PRICE).then_some(low),
            max: (high < MAX_PRICE).then_some(high),
        };
        self.sync_from_committed();
        self.committed
    }

    /// Text typed into the minimum spinner.
    ///
    /// Returns the new bounds when the text parses; malformed text keeps the
    /// previous committed value and returns `None`.
    pub fn set_min_text(&mut self, text: &str) -> Option<PriceBounds> {
        self.min_text = text.to_string();
        match parse_price_input(text) {
            Ok(value) => {
                let bounds = self.commit_min(value);
                if value.is_some() && bounds.min != value {
                    self.min_text = bounds.min.map(format_price_input).unwrap_or_default();
                }
                Some(bounds)
            }
            Err(err) => {
                debug!(%err, "Rejected minimum price input");
                None
            }
        }
    }

    /// Text typed into the maximum spinner. See [`Self::set_min_text`].
    pub fn set_max_text(&mut self, text: &str) -> Option<PriceBounds> {
        self.max_text = text.to_string();
        match parse_price_input(text) {
            Ok(value) => {
                let bounds = self.commit_max(value);
                if value.is_some() && bounds.max != value {
                    self.max_text = bounds.max.map(format_price_input).unwrap_or_default();
                }
                Some(bounds)
            }
            Err(err) => {
                debug!(%err, "Rejected maximum price input");
                None
            }
        }
    }

    /// Step the minimum spinner up (`steps > 0`) or down.
    pub fn step_min(&mut self, steps: i32) -> PriceBounds {
        let current = self.committed.min.unwrap_or(MIN_PRICE);
        let bounds = self.commit_min(Some(current + f64::from(steps) * PRICE_STEP));
        self.sync_from_committed();
        bounds
    }

    /// Step the maximum spinner up (`steps > 0`) or down.
    pub fn step_max(&mut self, steps: i32) -> PriceBounds {
        let current = self.committed.max.unwrap_or(MAX_PRICE);
        let bounds = self.commit_max(Some(current + f64::from(steps) * PRICE_STEP));
        self.sync_from_committed();
        bounds
    }

    /// Reset both bounds to absent and the range to the full span.
    pub fn clear(&mut self) -> PriceBounds {
        self.committed = PriceBounds::default();
        self.sync_from_committed();
        self.committed
    }

    fn commit_min(&mut self, value: Option<f64>) -> PriceBounds {
        let ceiling = self.committed.max.unwrap_or(MAX_PRICE);
        self.committed.min = value
            .map(|v| v.max(MIN_PRICE).min(ceiling))
            .filter(|v| *v > MIN_PRICE);
        self.preview = self.committed_span();
        self.committed
    }

    fn commit_max(&mut self, value: Option<f64>) -> PriceBounds {
        let floor = self.committed.min.unwrap_or(MIN_PRICE);
        self.committed.max = value
            .map(|v| v.min(MAX_PRICE).max(floor))
            .filter(|v| *v < MAX_PRICE);
        self.preview = self.committed_span();
        self.committed
    }

    fn committed_span(&self) -> (f64, f64) {
        (
            self.committed.min.unwrap_or(MIN_PRICE),
            self.committed.max.unwrap_or(MAX_PRICE),
        )
    }

    fn sync_from_committed(&mut self) {
        self.preview = self.committed_span();
        self.min_text = self.committed.min.map(format_price_input).unwrap_or_default();
        self.max_text = self.committed.max.map(format_price_input).unwrap_or_default();
    }
}

fn snap(value: f64) -> f64 {
    ((value / PRICE_STEP).round() * PRICE_STEP).clamp(MIN_PRICE, MAX_PRICE)
}
