use beachcomber::config::Config;
use beachcomber::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.start_path, "/");
    assert!(!config.ui.mouse_enabled);
    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.api.timeout_secs, 15);
    assert_eq!(config.map.zoom, 14);
    assert!(!config.logging.enabled);
}

#[test]
fn test_resources_url_joins_base_and_path() {
    let mut config = Config::default();
    assert_eq!(config.api.resources_url(), "http://localhost:8080/api/resources");

    config.api.base_url = "https://tourism.example.org/".to_string();
    config.api.resources_path = "v1/resources".to_string();
    assert_eq!(config.api.resources_url(), "https://tourism.example.org/v1/resources");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Zoom outside the allowed range should fail
    config.map.zoom = 30;
    assert!(config.validate().is_err());

    // Reset and test an inverted zoom range
    config = Config::default();
    config.map.min_zoom = 10;
    config.map.max_zoom = 5;
    assert!(config.validate().is_err());

    // Unsupported scheme
    config = Config::default();
    config.api.base_url = "ftp://example.org".to_string();
    assert!(config.validate().is_err());

    // Template without placeholders
    config = Config::default();
    config.map.tile_url_template = "https://tiles.example.org/tile.png".to_string();
    assert!(config.validate().is_err());

    // Start path must be absolute
    config = Config::default();
    config.ui.start_path = "explore".to_string();
    assert!(config.validate().is_err());

    // Unknown log level
    config = Config::default();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("start_path = \"/\""));
    assert!(toml_str.contains("timeout_secs = 15"));
    assert!(toml_str.contains("access_token_env = \"BEACHCOMBER_MAP_TOKEN\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
mouse_enabled = true
icon_theme = "Emoji"

[map]
zoom = 12
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, IconTheme::Emoji);
    assert_eq!(config.ui.start_path, "/");
    assert_eq!(config.map.zoom, 12);
    assert_eq!(config.map.max_zoom, 18);
    assert_eq!(config.api.timeout_secs, 15);
}

#[test]
fn test_generate_and_load_default_config() {
    let dir = std::env::temp_dir().join(format!("beachcomber_config_test_{}", std::process::id()));
    let path = dir.join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Beachcomber Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.map.zoom, Config::default().map.zoom);
    assert_eq!(loaded.api.base_url, Config::default().api.base_url);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_from_invalid_file_fails() {
    let path = std::env::temp_dir().join(format!("beachcomber_bad_config_{}.toml", std::process::id()));
    std::fs::write(&path, "[map]\nzoom = \"fourteen\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());

    let _ = std::fs::remove_file(&path);
}
