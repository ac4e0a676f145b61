pub mod resource;

pub use resource::{CategoryFilter, GeoPoint, Resource, CORE_CATEGORIES};
