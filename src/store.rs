//! In-memory resource store.
//!
//! The store is the single source of truth for fetched resources. It is owned by
//! the application state and handed to components by shared reference; the only
//! mutation is a wholesale [`ResourceStore::replace`]. Filtered views are derived
//! on every call and never cached.

use crate::entities::{CategoryFilter, Resource};

#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    resources: Vec<Resource>,
    loaded: bool,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full resource sequence in fetch order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Replace the whole sequence. No merge, no validation.
    pub fn replace(&mut self, resources: Vec<Resource>) {
        self.resources = resources;
        self.loaded = true;
    }

    /// Whether a fetch result has ever been committed (even an empty one).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.id == id)
    }

    /// Resources matching a category filter, order-preserving.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<Resource> {
        self.resources
            .iter()
            .filter(|resource| filter.matches(resource))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// A blank term returns the full sequence.
    pub fn search(&self, term: &str) -> Vec<Resource> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.resources.clone();
        }

        self.resources
            .iter()
            .filter(|resource| {
                resource.name.to_lowercase().contains(&needle) || resource.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
