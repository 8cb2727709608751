//! Listing view model: content state, grid layout, and pagination.

use estate_model::{PaginatedResult, Property};

use crate::format::format_price;

/// Shown on a card whose property has no name.
pub const UNNAMED_PROPERTY: &str = "Unnamed property";

/// Shown on a card whose property has no address.
pub const ADDRESS_UNAVAILABLE: &str = "Address not available";

/// Shown when a fetch succeeded with no items.
pub const EMPTY_MESSAGE: &str = "No properties found";

/// Shown when the list could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load properties";

/// What the listing area displays.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingContent<'a> {
    /// A fetch is in flight. Nothing else is shown.
    Loading,
    /// The last fetch failed.
    Failed,
    /// The fetch returned no items.
    Empty,
    /// One card per item, in display order.
    Populated(Vec<&'a Property>),
}

impl<'a> ListingContent<'a> {
    /// Pick the state for the given inputs. Loading wins over everything.
    pub fn new(loading: bool, failed: bool, items: Vec<&'a Property>) -> Self {
        if loading {
            Self::Loading
        } else if failed {
            Self::Failed
        } else if items.is_empty() {
            Self::Empty
        } else {
            Self::Populated(items)
        }
    }

    /// Identifiers keying the rendered cards, in order.
    pub fn card_keys(&self) -> Vec<&'a str> {
        match self {
            Self::Populated(items) => items.iter().copied().map(|p| p.id.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Number of grid columns for a viewport width, in logical pixels.
pub fn grid_columns(width: f32) -> usize {
    match width {
        w if w >= 992.0 => 4,
        w if w >= 768.0 => 3,
        w if w >= 576.0 => 2,
        _ => 1,
    }
}

/// Text shown on a property card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText<'a> {
    /// Identifier used as the card key and navigation target.
    pub id: &'a str,
    /// Name or [`UNNAMED_PROPERTY`].
    pub name: &'a str,
    /// Address or [`ADDRESS_UNAVAILABLE`].
    pub address: &'a str,
    /// Price formatted in pesos.
    pub price: String,
}

impl<'a> CardText<'a> {
    /// Build card text for a property.
    pub fn new(property: &'a Property) -> Self {
        Self {
            id: &property.id,
            name: non_blank(&property.name).unwrap_or(UNNAMED_PROPERTY),
            address: non_blank(&property.address).unwrap_or(ADDRESS_UNAVAILABLE),
            price: format_price(property.price),
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}

/// Result count header: `1 property found` / `12 properties found`.
pub fn count_label(total: u64) -> String {
    if total == 1 {
        "1 property found".to_string()
    } else {
        format!("{total} properties found")
    }
}

/// Pagination summary: `13-14 of 14 properties`.
pub fn range_label(page: &PaginatedResult) -> String {
    format!(
        "{}-{} of {} properties",
        page.range_start(),
        page.range_end(),
        page.total_count
    )
}

/// One entry of the page button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A numbered page button.
    Page(u32),
    /// A gap of two or more hidden pages.
    Ellipsis,
}

/// Pages always shown on each side of the current page.
const PAGE_WINDOW: u32 = 2;

/// Build the page strip for `current` out of `total` pages.
///
/// The first and last pages are always present, plus a window around the
/// current page. A gap of a single page shows that page instead of an
/// ellipsis.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let start = current.saturating_sub(PAGE_WINDOW).max(1);
    let end = (current + PAGE_WINDOW).min(total);

    let mut pages = vec![1];
    pages.extend(start..=end);
    pages.push(total);
    pages.sort_unstable();
    pages.dedup();

    let mut items = Vec::with_capacity(pages.len() + 2);
    let mut previous = 0;
    for page in pages {
        match page - previous {
            1 => {}
            2 => items.push(PageItem::Page(previous + 1)),
            _ => items.push(PageItem::Ellipsis),
        }
        items.push(PageItem::Page(page));
        previous = page;
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn properties() -> Vec<Property> {
        vec![
            Property::new("a", "Casa", 3.0),
            Property::new("b", "Lote", 1.0),
            Property::new("c", "Finca", 2.0),
        ]
    }

    #[test]
    fn test_loading_wins() {
        let items = properties();
        let content = ListingContent::new(true, false, items.iter().collect());
        assert_eq!(content, ListingContent::Loading);
        assert!(content.card_keys().is_empty());
    }

    #[test]
    fn test_empty_and_failed() {
        assert_eq!(ListingContent::new(false, false, Vec::new()), ListingContent::Empty);
        assert_eq!(ListingContent::new(false, true, Vec::new()), ListingContent::Failed);
    }

    #[test]
    fn test_populated_keys_follow_items() {
        let items = properties();
        let content = ListingContent::new(false, false, items.iter().collect());
        assert_eq!(content.card_keys(), ["a", "b", "c"]);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(400.0), 1);
        assert_eq!(grid_columns(576.0), 2);
        assert_eq!(grid_columns(800.0), 3);
        assert_eq!(grid_columns(1280.0), 4);
    }

    #[test]
    fn test_card_fallbacks() {
        let mut property = Property::new("x", "", 150_000_000.0);
        property.address = " ".to_string();
        let card = CardText::new(&property);
        assert_eq!(card.name, UNNAMED_PROPERTY);
        assert_eq!(card.address, ADDRESS_UNAVAILABLE);
        assert_eq!(card.price, "$ 150.000.000");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 properties found");
        assert_eq!(count_label(1), "1 property found");
        assert_eq!(count_label(14), "14 properties found");
    }

    #[test]
    fn test_page_items_small() {
        assert_eq!(page_items(1, 1), [Page(1)]);
        assert_eq!(page_items(2, 4), [Page(1), Page(2), Page(3), Page(4)]);
        assert!(page_items(1, 0).is_empty());
    }

    #[test]
    fn test_page_items_with_ellipsis() {
        assert_eq!(
            page_items(1, 10),
            [Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(6, 10),
            [Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_items(5, 10),
            [Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }
}
