//! Map model: viewport, tile layer and markers, independent of any widget.

pub mod markers;
pub mod tiles;
pub mod viewport;

pub use markers::{Marker, MarkerDiff, MarkerLayer, Popup};
pub use tiles::{TileCoord, TileLayer};
pub use viewport::{GeoBounds, Viewport};

use crate::config::MapConfig;
use crate::entities::Resource;

/// A mounted map: viewport, base layer and the current marker set.
#[derive(Debug, Clone)]
pub struct MapView {
    pub viewport: Viewport,
    tiles: TileLayer,
    markers: MarkerLayer,
    selected: Option<usize>,
    popup_open: bool,
}

impl MapView {
    /// Build the viewport and tile layer from configuration
    pub fn mount(config: &MapConfig) -> Self {
        let viewport = Viewport::new(config.center(), config.zoom, config.min_zoom, config.max_zoom);
        log::info!("Map mounted at {} zoom {}", viewport.center, viewport.zoom);

        Self {
            viewport,
            tiles: TileLayer::from_config(config),
            markers: MarkerLayer::new(),
            selected: None,
            popup_open: false,
        }
    }

    /// Materialise one marker per resource after a fetch
    pub fn show_resources(&mut self, resources: &[Resource]) -> MarkerDiff {
        let diff = self.markers.replace_with(resources);
        self.selected = None;
        self.popup_open = false;
        log::info!("Showing {} markers", self.markers.len());
        diff
    }

    /// Replace the marker set with a filtered subset, keeping the selection when it survives
    pub fn update_markers(&mut self, resources: &[Resource]) -> MarkerDiff {
        let selected_id = self.selected_marker().map(|m| m.resource_id.clone());
        let diff = self.markers.replace_with(resources);

        self.selected = selected_id.and_then(|id| self.markers.position_of(&id));
        if self.selected.is_none() {
            self.popup_open = false;
        }

        log::debug!(
            "Markers updated: {} added, {} removed, {} kept",
            diff.added,
            diff.removed,
            diff.kept
        );
        diff
    }

    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    pub fn tiles(&self) -> &TileLayer {
        &self.tiles
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.selected.and_then(|index| self.markers.get(index))
    }

    pub fn select_next(&mut self) -> Option<&Marker> {
        if self.markers.is_empty() {
            return None;
        }
        let next = match self.selected {
            Some(index) => (index + 1) % self.markers.len(),
            None => 0,
        };
        self.selected = Some(next);
        self.selected_marker()
    }

    pub fn select_previous(&mut self) -> Option<&Marker> {
        if self.markers.is_empty() {
            return None;
        }
        let len = self.markers.len();
        let previous = match self.selected {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        };
        self.selected = Some(previous);
        self.selected_marker()
    }

    /// Open or close the popup of the selected marker. Returns whether a popup is now open.
    pub fn toggle_popup(&mut self) -> bool {
        self.popup_open = self.selected.is_some() && !self.popup_open;
        self.popup_open
    }

    pub fn open_popup(&self) -> Option<&Popup> {
        if self.popup_open {
            self.selected_marker().map(|m| &m.popup)
        } else {
            None
        }
    }

    /// Centre the viewport on the selected marker
    pub fn recenter_on_selected(&mut self) -> bool {
        match self.selected_marker().map(|m| m.position) {
            Some(position) => {
                self.viewport.set_center(position);
                true
            }
            None => false,
        }
    }

    /// Redacted URLs of the tiles covering a `cols` x `rows` window
    pub fn visible_tile_urls(&self, cols: u16, rows: u16) -> Vec<String> {
        self.tiles
            .visible_tiles(&self.viewport, cols, rows)
            .into_iter()
            .map(|coord| self.tiles.redacted_tile_url(coord))
            .collect()
    }
}
