//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application identity
pub const APP_NAME: &str = "beachcomber";
pub const CONFIG_FILE_NAME: &str = "beachcomber.toml";
pub const LOG_FILE_NAME: &str = "beachcomber.log";

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_RESOURCES_PATH: &str = "/api/resources";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_MEDIA_BASE_URL: &str = "http://api.opencaribbean.org/api/v1/media/download/";

// Map defaults (Treasure Beach, Jamaica)
pub const DEFAULT_MAP_LATITUDE: f64 = 17.8871132;
pub const DEFAULT_MAP_LONGITUDE: f64 = -77.7639855;
pub const DEFAULT_MAP_ZOOM: u8 = 14;
pub const DEFAULT_MAP_MIN_ZOOM: u8 = 1;
pub const DEFAULT_MAP_MAX_ZOOM: u8 = 18;
pub const DEFAULT_TILE_URL_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/streets-v9/tiles/{z}/{x}/{y}?access_token={access_token}";
pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "BEACHCOMBER_MAP_TOKEN";
pub const DEFAULT_MAP_ATTRIBUTION: &str = "Map data © OpenStreetMap contributors, CC-BY-SA, Imagery © Mapbox";
/// Edge length of a slippy-map tile in pixels
pub const TILE_SIZE_PX: f64 = 256.0;
/// Pixel footprint of one terminal cell, used to size the visible map span
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;
/// Fraction of the visible span moved by one pan step
pub const PAN_STEP_FRACTION: f64 = 0.2;

// Routes
pub const ROUTE_ROOT: &str = "/";
pub const NOT_FOUND_TITLE: &str = "404 - Not Found";

// Success Messages
pub const SUCCESS_RESOURCES_LOADED: &str = "✅ Resources loaded";

// Error Messages
pub const ERROR_FETCH_FAILED: &str = "❌ Failed to fetch resources";
pub const ERROR_NO_RESOURCES_LOADED: &str = "❌ No resources loaded yet";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const SEARCH_PLACEHOLDER: &str = "Search Treasure Beach...";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const STATUS_HINTS: &str =
    "1-4: category • 0: all • /: search • Tab: marker • Enter: popup • x: listing • ?: help • q: quit";
