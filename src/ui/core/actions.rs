use crate::api::FetchOutcome;
use crate::entities::{CategoryFilter, Resource};

#[derive(Debug, Clone)]
pub enum Action {
    // Routing
    Navigate(String),

    // Data loading
    FetchResources,
    ResourcesLoaded(FetchOutcome),
    FetchFailed(String),

    // Derived views
    CategorySelected(CategoryFilter),
    ShowAllResources,
    SearchResources(String),
    FilterResources {
        /// `None` for the unfiltered view and for search results
        filter: Option<CategoryFilter>,
        resources: Vec<Resource>,
    },
    GetDirections,

    // Map
    MarkerSelected(Option<String>),

    // UI operations
    ToggleListing,
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    Error(String),
    Info(String),
    Help,
    Logs,
    /// Prompt for a path to navigate to
    GoTo,
}
