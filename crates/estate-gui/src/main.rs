//! Estate Studio - Desktop GUI Application
//!
//! Browse, search, and inspect the property catalog served by the Estate
//! GraphQL API.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use iced::{Size, window};

use estate_client::{PropertyApi, PropertySource};
use estate_core::Route;
use estate_gui::app::{App, load_app_icon};
use estate_gui::cli::Cli;
use estate_gui::config::AppConfig;
use estate_gui::error::GuiError;
use estate_gui::logging::{LogConfig, init_logging};

/// Application entry point.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.overrides()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(suggestion) = err.suggestion() {
                eprintln!("hint: {suggestion}");
            }
            std::process::exit(1);
        }
    };

    let command_line = cli
        .verbosity
        .is_present()
        .then(|| cli.verbosity.tracing_level_filter());
    let log_config = LogConfig::resolve(config.level_filter(), command_line)
        .with_format(cli.log_format.into())
        .with_ansi(std::io::stderr().is_terminal());
    init_logging(&log_config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        app_url = %config.app_url,
        transport = ?config.transport,
        "Starting Estate Studio"
    );

    let settings_path = AppConfig::config_path();
    match AppConfig::write_default_if_missing(&settings_path) {
        Ok(true) => tracing::info!(path = %settings_path.display(), "Wrote default settings"),
        Ok(false) => {}
        Err(err) => tracing::warn!(%err, "Could not write default settings"),
    }

    let route = Route::parse(&cli.route).map_err(GuiError::from)?;

    let source: Arc<dyn PropertySource> = Arc::new(
        PropertyApi::new(&config.client_config()).context("Failed to create the catalog client")?,
    );

    iced::application(
        move || App::new(config.clone(), Arc::clone(&source), route.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .window(window::Settings {
        size: Size::new(1280.0, 800.0),
        min_size: Some(Size::new(480.0, 600.0)),
        icon: load_app_icon(),
        ..Default::default()
    })
    .run()?;

    Ok(())
}
