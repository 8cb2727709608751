//! Property catalog data model for Estate Studio.
//!
//! This crate provides the types exchanged with the property catalog API and
//! shared by every other crate in the workspace:
//!
//! - [`property`]: `Property`, `Owner`, and `PropertyTrace` as returned by the API
//! - [`page`]: `PaginatedResult`, one page of a list query
//! - [`filters`]: `PropertyFilters`, the parameter set sent with a list query
//! - [`sort`]: `SortOption` and the client-side ordering it applies
//!
//! All types are read-only snapshots of remote data. Nothing here is persisted.
//!
//! # Example
//!
//! ```
//! use estate_model::{Property, SortOption};
//!
//! let mut items = vec![
//!     Property::new("b", "Villa", 300.0),
//!     Property::new("a", "Apartment", 100.0),
//! ];
//!
//! SortOption::NameAsc.apply(&mut items);
//! assert_eq!(items[0].id, "a");
//! ```

pub mod filters;
pub mod page;
pub mod property;
pub mod sort;

pub use filters::{DEFAULT_PAGE, PROPERTY_PAGE_SIZE, PropertyFilters};
pub use page::PaginatedResult;
pub use property::{Owner, Property, PropertyTrace};
pub use sort::SortOption;
