//! Slippy-map tile layer.

use super::viewport::{project_at, Viewport};
use crate::config::MapConfig;
use crate::constants::TILE_SIZE_PX;
use crate::entities::GeoPoint;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone)]
pub struct TileLayer {
    url_template: String,
    access_token: Option<String>,
    attribution: String,
    max_zoom: u8,
}

impl TileLayer {
    pub fn new(
        url_template: impl Into<String>,
        access_token: Option<String>,
        attribution: impl Into<String>,
        max_zoom: u8,
    ) -> Self {
        Self {
            url_template: url_template.into(),
            access_token,
            attribution: attribution.into(),
            max_zoom,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        let access_token = config.access_token();
        if access_token.is_none() && config.tile_url_template.contains("{access_token}") {
            log::warn!(
                "Tile service token not set; export {} to authenticate tile requests",
                config.access_token_env
            );
        }
        Self::new(
            config.tile_url_template.clone(),
            access_token,
            config.attribution.clone(),
            config.max_zoom,
        )
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Tile containing `point` at `zoom`
    pub fn tile_for(point: &GeoPoint, zoom: u8) -> TileCoord {
        let (px, py) = project_at(point, zoom);
        Self::tile_at_pixel(px, py, zoom)
    }

    fn tile_at_pixel(px: f64, py: f64, zoom: u8) -> TileCoord {
        let n = 1_i64 << zoom;
        let x_raw = (px / TILE_SIZE_PX).floor() as i64;
        let y_raw = (py / TILE_SIZE_PX).floor() as i64;

        TileCoord {
            z: zoom,
            x: x_raw.rem_euclid(n) as u32,
            y: y_raw.clamp(0, n - 1) as u32,
        }
    }

    /// Interpolate the URL template for a tile
    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.render_url(coord, self.access_token.as_deref().unwrap_or_default())
    }

    /// Tile URL with the access token masked, safe for logs
    pub fn redacted_tile_url(&self, coord: TileCoord) -> String {
        let mask = if self.access_token.is_some() { "***" } else { "" };
        self.render_url(coord, mask)
    }

    fn render_url(&self, coord: TileCoord, token: &str) -> String {
        let mut values: HashMap<&str, String> = HashMap::new();
        values.insert("z", coord.z.min(self.max_zoom).to_string());
        values.insert("x", coord.x.to_string());
        values.insert("y", coord.y.to_string());
        values.insert("s", "a".to_string());
        values.insert("access_token", token.to_string());

        let mut url = self.url_template.clone();
        for (key, value) in &values {
            url = url.replace(&format!("{{{key}}}"), value);
        }
        url
    }

    /// Every tile intersecting a `cols` x `rows` cell window, row-major from the top left
    pub fn visible_tiles(&self, viewport: &Viewport, cols: u16, rows: u16) -> Vec<TileCoord> {
        let zoom = viewport.zoom;
        let (cx, cy) = viewport.project(&viewport.center);
        let (w, h) = Viewport::span_px(cols, rows);
        let n = 1_i64 << zoom;

        let min_x = ((cx - w / 2.0) / TILE_SIZE_PX).floor() as i64;
        let max_x = ((cx + w / 2.0) / TILE_SIZE_PX).floor() as i64;
        let min_y = ((cy - h / 2.0) / TILE_SIZE_PX).floor().max(0.0) as i64;
        let max_y = (((cy + h / 2.0) / TILE_SIZE_PX).floor() as i64).min(n - 1);

        let mut tiles = Vec::new();
        for y in min_y..=max_y {
            // At low zoom the window can be wider than the world
            for x in min_x..=max_x.min(min_x + n - 1) {
                tiles.push(TileCoord {
                    z: zoom,
                    x: x.rem_euclid(n) as u32,
                    y: y as u32,
                });
            }
        }
        tiles
    }
}
