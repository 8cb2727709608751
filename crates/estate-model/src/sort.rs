//! Client-side ordering of a fetched page.
//!
//! Sorting never triggers a fetch. It is applied to the items already on
//! screen, after they arrive and before they reach the listing view.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::property::Property;

/// Ordering applied to the current page of properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Server order.
    #[default]
    Default,
    /// Name, A to Z.
    NameAsc,
    /// Name, Z to A.
    NameDesc,
    /// Price, lowest first.
    PriceAsc,
    /// Price, highest first.
    PriceDesc,
}

impl SortOption {
    /// Every option, in display order.
    pub const ALL: [SortOption; 5] = [
        Self::Default,
        Self::NameAsc,
        Self::NameDesc,
        Self::PriceAsc,
        Self::PriceDesc,
    ];

    /// Options offered by the sort selector.
    pub const SELECTABLE: [SortOption; 4] = [
        Self::NameAsc,
        Self::NameDesc,
        Self::PriceAsc,
        Self::PriceDesc,
    ];

    /// Stable identifier (`name-asc`, `price-desc`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Default => "Relevance",
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::PriceAsc => "Price (Low to High)",
            Self::PriceDesc => "Price (High to Low)",
        }
    }

    /// Order two properties. `Default` treats every pair as equal.
    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            Self::Default => Ordering::Equal,
            Self::NameAsc => compare_names(a, b),
            Self::NameDesc => compare_names(b, a),
            Self::PriceAsc => a.price.total_cmp(&b.price),
            Self::PriceDesc => b.price.total_cmp(&a.price),
        }
    }

    /// Sort `items` in place. The sort is stable, so ties keep server order.
    pub fn apply(&self, items: &mut [Property]) {
        if *self != Self::Default {
            items.sort_by(|a, b| self.compare(a, b));
        }
    }

    /// Return sorted references without cloning the items.
    pub fn sorted<'a>(&self, items: &'a [Property]) -> Vec<&'a Property> {
        let mut refs: Vec<&Property> = items.iter().collect();
        if *self != Self::Default {
            refs.sort_by(|a, b| self.compare(a, b));
        }
        refs
    }
}

fn compare_names(a: &Property, b: &Property) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown sort identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option: {0}")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}
