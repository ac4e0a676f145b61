//! UI module for Beachcomber
//!
//! This module handles the terminal interface: the explore screen, its components, dialogs and the event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use layout::LayoutManager;
pub use renderer::run_app;
