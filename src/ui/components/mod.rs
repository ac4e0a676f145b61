//! Reusable UI components

pub mod dialogs;
pub mod status_bar;
pub mod text_input;

// Component architecture
pub mod category_bar_component;
pub mod dialog_component;
pub mod header_component;
pub mod listing_component;
pub mod map_component;
pub mod not_found_component;

// Component exports
pub use category_bar_component::CategoryBarComponent;
pub use dialog_component::DialogComponent;
pub use header_component::HeaderComponent;
pub use listing_component::ListingComponent;
pub use map_component::MapComponent;
pub use not_found_component::NotFoundComponent;
pub use status_bar::StatusBar;
