//! Two-route dispatch: the root path shows the map, everything else is not found.

use crate::constants::ROUTE_ROOT;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// The map view ("explore")
    #[default]
    Explore,
    /// Fallback for any unmatched path
    NotFound(String),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Explore => "explore",
            Route::NotFound(_) => "not-found",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    current_path: String,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current_path: ROUTE_ROOT.to_string(),
        }
    }

    /// Map a path to its route. Query strings and fragments are ignored.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim();
        let route_part = trimmed.split(['?', '#']).next().unwrap_or_default();

        match route_part {
            "" | ROUTE_ROOT => Route::Explore,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    /// Navigate to a path and return the resolved route
    pub fn navigate(&mut self, path: &str) -> Route {
        self.current_path = path.trim().to_string();
        Self::resolve(&self.current_path)
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_route(&self) -> Route {
        Self::resolve(&self.current_path)
    }
}
