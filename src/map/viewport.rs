//! Web-Mercator viewport over a terminal-sized window.

use crate::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX, TILE_SIZE_PX};
use crate::entities::GeoPoint;
use std::f64::consts::PI;

/// Latitude limit of the square Web-Mercator world
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

/// Geographic bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let in_lat = point.latitude <= self.north && point.latitude >= self.south;
        let in_lng = if self.west <= self.east {
            point.longitude >= self.west && point.longitude <= self.east
        } else {
            // Span crosses the antimeridian
            point.longitude >= self.west || point.longitude <= self.east
        };
        in_lat && in_lng
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: u8, min_zoom: u8, max_zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    /// Size of the whole world in pixels at the given zoom
    pub fn world_size(zoom: u8) -> f64 {
        TILE_SIZE_PX * f64::from(1u32 << zoom.min(30))
    }

    /// Project a coordinate to world pixels at the current zoom
    pub fn project(&self, point: &GeoPoint) -> (f64, f64) {
        project_at(point, self.zoom)
    }

    /// Inverse of [`Viewport::project`]
    pub fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        let size = Self::world_size(self.zoom);
        let longitude = x / size * 360.0 - 180.0;
        let n = PI - 2.0 * PI * y / size;
        let latitude = n.sinh().atan().to_degrees();
        GeoPoint::new(latitude, longitude)
    }

    /// Pixel span covered by a window of `cols` x `rows` terminal cells
    pub fn span_px(cols: u16, rows: u16) -> (f64, f64) {
        (f64::from(cols) * CELL_WIDTH_PX, f64::from(rows) * CELL_HEIGHT_PX)
    }

    /// Geographic bounds visible in a window of `cols` x `rows` cells
    pub fn bounds(&self, cols: u16, rows: u16) -> GeoBounds {
        let (cx, cy) = self.project(&self.center);
        let (w, h) = Self::span_px(cols, rows);
        let top_left = self.unproject(cx - w / 2.0, cy - h / 2.0);
        let bottom_right = self.unproject(cx + w / 2.0, cy + h / 2.0);

        GeoBounds {
            north: top_left.latitude,
            south: bottom_right.latitude,
            west: wrap_longitude(top_left.longitude),
            east: wrap_longitude(bottom_right.longitude),
        }
    }

    /// Offset of a point from the centre in pixels, y pointing up
    pub fn to_canvas(&self, point: &GeoPoint) -> (f64, f64) {
        let (cx, cy) = self.project(&self.center);
        let (px, py) = self.project(point);
        let size = Self::world_size(self.zoom);

        // Take the short way round the antimeridian
        let mut dx = px - cx;
        if dx > size / 2.0 {
            dx -= size;
        } else if dx < -size / 2.0 {
            dx += size;
        }

        (dx, cy - py)
    }

    /// Move the centre by a fraction of the visible span (positive = east / north)
    pub fn pan(&mut self, dx_fraction: f64, dy_fraction: f64, cols: u16, rows: u16) {
        let (cx, cy) = self.project(&self.center);
        let (w, h) = Self::span_px(cols, rows);
        let size = Self::world_size(self.zoom);

        let new_x = (cx + dx_fraction * w).rem_euclid(size);
        let new_y = (cy - dy_fraction * h).clamp(0.0, size);
        let moved = self.unproject(new_x, new_y);
        self.center = GeoPoint::new(
            moved.latitude.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE),
            wrap_longitude(moved.longitude),
        );
    }

    pub fn zoom_in(&mut self) -> bool {
        if self.zoom < self.max_zoom {
            self.zoom += 1;
            true
        } else {
            false
        }
    }

    pub fn zoom_out(&mut self) -> bool {
        if self.zoom > self.min_zoom {
            self.zoom -= 1;
            true
        } else {
            false
        }
    }

    pub fn set_center(&mut self, center: GeoPoint) {
        self.center = center;
    }
}

/// Project a coordinate to world pixels at `zoom`
pub fn project_at(point: &GeoPoint, zoom: u8) -> (f64, f64) {
    let size = Viewport::world_size(zoom);
    let latitude = point.latitude.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
    let lat_rad = latitude.to_radians();

    let x = (point.longitude + 180.0) / 360.0 * size;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}
