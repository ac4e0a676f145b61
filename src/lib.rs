//! Beachcomber - a terminal client for discovering places to stay, things to do and local services
//!
//! This library fetches points of interest from a resource endpoint, lets the user narrow
//! them down by category or search term, and shows them as cards and as markers on a map
//! built with Ratatui.
//!
//! # Modules
//!
//! * [`api`] - Resource sources and the wire format they speak
//! * [`config`] - Application configuration management
//! * [`map`] - Viewport math, tile addressing and marker bookkeeping
//! * [`router`] - Path resolution for the two screens
//! * [`store`] - In-memory resource store with category and search views
//! * [`ui`] - Terminal user interface components and rendering

/// Resource sources over HTTP or a local file
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Resource and category models
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Map model: viewport, tiles and markers
pub mod map;

/// Path routing between the map and the not-found page
pub mod router;

/// Loaded resources and the views derived from them
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

pub use entities::{CategoryFilter, GeoPoint, Resource};
