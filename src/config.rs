//! Configuration management for Beachcomber
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_ACCESS_TOKEN_ENV, DEFAULT_API_BASE_URL,
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_MAP_ATTRIBUTION, DEFAULT_MAP_LATITUDE, DEFAULT_MAP_LONGITUDE,
    DEFAULT_MAP_MAX_ZOOM, DEFAULT_MAP_MIN_ZOOM, DEFAULT_MAP_ZOOM, DEFAULT_MEDIA_BASE_URL, DEFAULT_RESOURCES_PATH,
    DEFAULT_TILE_URL_TEMPLATE, ROUTE_ROOT,
};
use crate::entities::GeoPoint;
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub api: ApiConfig,
    pub map: MapConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Path to open on startup ("/" is the map view)
    pub start_path: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Endpoint that image references are appended to
    pub media_base_url: String,
    /// Icon theme: "Emoji", "Unicode" or "Ascii"
    pub icon_theme: IconTheme,
}

/// Resource API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server root, or `file:///path/to/resources.json` for offline data
    pub base_url: String,
    pub resources_path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Map view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Tile URL with `{z}`, `{x}`, `{y}` and optionally `{s}` / `{access_token}` placeholders
    pub tile_url_template: String,
    /// Name of the environment variable holding the tile service token
    pub access_token_env: String,
    pub attribution: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_path: ROUTE_ROOT.to_string(),
            mouse_enabled: false,
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            resources_path: DEFAULT_RESOURCES_PATH.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: DEFAULT_MAP_LATITUDE,
            center_longitude: DEFAULT_MAP_LONGITUDE,
            zoom: DEFAULT_MAP_ZOOM,
            min_zoom: DEFAULT_MAP_MIN_ZOOM,
            max_zoom: DEFAULT_MAP_MAX_ZOOM,
            tile_url_template: DEFAULT_TILE_URL_TEMPLATE.to_string(),
            access_token_env: DEFAULT_ACCESS_TOKEN_ENV.to_string(),
            attribution: DEFAULT_MAP_ATTRIBUTION.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the resource list endpoint
    pub fn resources_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.resources_path.trim_start_matches('/')
        )
    }
}

impl MapConfig {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_latitude, self.center_longitude)
    }

    /// Read the tile service token from the configured environment variable
    pub fn access_token(&self) -> Option<String> {
        std::env::var(&self.access_token_env).ok().filter(|token| !token.is_empty())
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate map settings
        if self.map.min_zoom > self.map.max_zoom {
            anyhow::bail!(
                "min_zoom ({}) cannot exceed max_zoom ({})",
                self.map.min_zoom,
                self.map.max_zoom
            );
        }
        if self.map.max_zoom > 22 {
            anyhow::bail!("max_zoom cannot exceed 22, got {}", self.map.max_zoom);
        }
        if !(self.map.min_zoom..=self.map.max_zoom).contains(&self.map.zoom) {
            anyhow::bail!(
                "zoom must be between {} and {}, got {}",
                self.map.min_zoom,
                self.map.max_zoom,
                self.map.zoom
            );
        }
        if !self.map.center().is_valid() {
            anyhow::bail!("map center {} is not a valid coordinate", self.map.center());
        }
        if self.map.access_token_env.is_empty() {
            anyhow::bail!("access_token_env cannot be empty");
        }
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.map.tile_url_template.contains(placeholder) {
                anyhow::bail!("tile_url_template is missing the {} placeholder", placeholder);
            }
        }

        // Validate API settings
        if self.api.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        let valid_schemes = ["http://", "https://", "file://"];
        if !valid_schemes.iter().any(|scheme| self.api.base_url.starts_with(scheme)) {
            anyhow::bail!(
                "base_url must start with one of {}, got '{}'",
                valid_schemes.join(", "),
                self.api.base_url
            );
        }

        // Validate routing and logging
        if !self.ui.start_path.starts_with('/') {
            anyhow::bail!("start_path must start with '/', got '{}'", self.ui.start_path);
        }
        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Beachcomber Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
