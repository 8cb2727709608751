//! Services for background tasks.
//!
//! These services provide async functions for use with Iced's `Task::perform` pattern.

pub mod catalog;
pub mod photos;

pub use catalog::{fetch_page, fetch_property};
pub use photos::fetch_photo;
