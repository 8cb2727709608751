//! Estate Studio - GUI Library
//!
//! The desktop property catalog: application types, views, and the services
//! bridging the catalog client into iced tasks.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod cli;
pub mod component;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
