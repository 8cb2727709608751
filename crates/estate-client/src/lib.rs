//! Data-fetch adapter for the property catalog.
//!
//! Talks to the catalog's GraphQL service and turns its responses into
//! [`estate_model`] types. The [`PropertySource`] trait is the seam the GUI
//! depends on; [`PropertyApi`] is the live implementation and
//! [`InMemorySource`] serves a fixed list.
//!
//! # Example
//!
//! ```no_run
//! use estate_client::{ClientConfig, PropertyApi, PropertySource};
//! use estate_model::PropertyFilters;
//!
//! # async fn run() -> estate_client::Result<()> {
//! let api = PropertyApi::new(&ClientConfig::default())?;
//! let page = api.list_properties(&PropertyFilters::default()).await?;
//! println!("{} properties", page.total_count);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod query;
pub mod source;

pub use api::PropertyApi;
pub use client::GraphQlClient;
pub use config::{ClientConfig, DEFAULT_CACHE_TTL, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, Transport};
pub use error::{ClientError, Result};
pub use memory::InMemorySource;
pub use source::PropertySource;
