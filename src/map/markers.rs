use crate::entities::{GeoPoint, Resource};
use std::collections::HashSet;

/// Content shown when a marker is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub resource_id: String,
    pub position: GeoPoint,
    pub category: String,
    pub popup: Popup,
}

impl Marker {
    pub fn for_resource(resource: &Resource) -> Self {
        Self {
            resource_id: resource.id.clone(),
            position: resource.location,
            category: resource.category.clone(),
            popup: Popup {
                title: resource.name.clone(),
                body: resource.description.clone(),
            },
        }
    }
}

/// What changed when a marker set was replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerDiff {
    pub added: usize,
    pub removed: usize,
    pub kept: usize,
}

impl MarkerDiff {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// One marker per resource, in resource order.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every marker with markers for `resources` and report the difference.
    pub fn replace_with(&mut self, resources: &[Resource]) -> MarkerDiff {
        let previous: HashSet<&str> = self.markers.iter().map(|m| m.resource_id.as_str()).collect();
        let next: HashSet<&str> = resources.iter().map(|r| r.id.as_str()).collect();

        let kept = next.intersection(&previous).count();
        let diff = MarkerDiff {
            added: next.len() - kept,
            removed: previous.len() - kept,
            kept,
        };

        self.markers = resources.iter().map(Marker::for_resource).collect();
        diff
    }

    pub fn clear(&mut self) -> MarkerDiff {
        self.replace_with(&[])
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn position_of(&self, resource_id: &str) -> Option<usize> {
        self.markers.iter().position(|m| m.resource_id == resource_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str) -> Resource {
        Resource {
            id: id.to_string(),
            name: format!("Place {id}"),
            category: "Attraction".to_string(),
            location: GeoPoint::new(17.88, -77.76),
            description: format!("About {id}"),
            image: None,
        }
    }

    #[test]
    fn test_replace_reports_diff() {
        let mut layer = MarkerLayer::new();
        let diff = layer.replace_with(&[resource("a"), resource("b")]);
        assert_eq!(diff, MarkerDiff { added: 2, removed: 0, kept: 0 });

        let diff = layer.replace_with(&[resource("b"), resource("c")]);
        assert_eq!(diff, MarkerDiff { added: 1, removed: 1, kept: 1 });
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.position_of("c"), Some(1));
    }

    #[test]
    fn test_popup_carries_name_and_description() {
        let marker = Marker::for_resource(&resource("a"));
        assert_eq!(marker.popup.title, "Place a");
        assert_eq!(marker.popup.body, "About a");
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut layer = MarkerLayer::new();
        layer.replace_with(&[resource("a")]);
        let diff = layer.clear();
        assert_eq!(diff.removed, 1);
        assert!(layer.is_empty());
    }
}
