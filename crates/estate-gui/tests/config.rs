//! Settings file persistence.

use estate_client::Transport;
use estate_gui::config::AppConfig;
use estate_gui::theme::ThemeMode;

#[test]
fn test_saved_settings_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let config = AppConfig {
        api_url: "https://api.example.com/graphql".to_string(),
        transport: Transport::Post,
        page_size: 24,
        theme_mode: ThemeMode::Dark,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(AppConfig::load_from(&path), config);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "debounce_ms = 250\n").unwrap();

    let config = AppConfig::load_from(&path);
    assert_eq!(config.debounce_ms, 250);
    assert_eq!(config.page_size, AppConfig::default().page_size);
    assert_eq!(config.api_url, AppConfig::default().api_url);
}

#[test]
fn test_malformed_or_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    assert_eq!(AppConfig::load_from(&path), AppConfig::default());

    std::fs::write(&path, "page_size = \"many\"").unwrap();
    assert_eq!(AppConfig::load_from(&path), AppConfig::default());
}

#[test]
fn test_defaults_are_written_only_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    assert!(AppConfig::write_default_if_missing(&path).unwrap());
    std::fs::write(&path, "page_size = 6\n").unwrap();
    assert!(!AppConfig::write_default_if_missing(&path).unwrap());
    assert_eq!(AppConfig::load_from(&path).page_size, 6);
}
