// src/geo.rs
//
// Static location → coordinate lookup and the Web-Mercator projection used
// by the bubble map.

use std::f64::consts::PI;

use crate::config::consts::MAP_TILE_PX;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

pub const COORDINATES: &[(&str, LatLon)] = &[
    ("南京", LatLon { lat: 32.0603, lon: 118.7969 }),
    ("苏州", LatLon { lat: 31.2989, lon: 120.5853 }),
    ("杭州", LatLon { lat: 30.2741, lon: 120.1551 }),
    ("北京", LatLon { lat: 39.9042, lon: 116.4074 }),
    ("扬州", LatLon { lat: 32.3942, lon: 119.4129 }),
    ("济南", LatLon { lat: 36.6512, lon: 117.1201 }),
    ("湖州", LatLon { lat: 30.8943, lon: 120.0868 }),
];

/// Coordinates of a canonical location; `None` when it is not in the table.
pub fn lookup(location: &str) -> Option<LatLon> {
    COORDINATES.iter().find(|(name, _)| *name == location).map(|(_, c)| *c)
}

/// Slippy-map style projection: the whole world is `256 · 2^zoom` px wide.
#[derive(Clone, Copy, Debug)]
pub struct WebMercator {
    world_px: f64,
    center: (f64, f64),
}

impl WebMercator {
    pub fn new(center: LatLon, zoom: f64) -> Self {
        let world_px = MAP_TILE_PX * 2f64.powf(zoom);
        let mut m = Self { world_px, center: (0.0, 0.0) };
        m.center = m.world(center);
        m
    }

    /// Absolute world pixel of a point. Latitude is clamped to the usual
    /// ±85.0511° so the poles stay finite.
    fn world(&self, p: LatLon) -> (f64, f64) {
        let lat = p.lat.clamp(-85.0511, 85.0511).to_radians();
        let x = (p.lon + 180.0) / 360.0 * self.world_px;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * self.world_px;
        (x, y)
    }

    /// Pixel offset of `p` from the map centre (x right, y down).
    pub fn project(&self, p: LatLon) -> (f64, f64) {
        let (x, y) = self.world(p);
        (x - self.center.0, y - self.center.1)
    }
}

/// Bubble radius in px. Area grows with count; the largest count gets
/// `size_max` as diameter. Zero counts get no bubble.
pub fn bubble_radius(count: u64, max_count: u64, size_max: f32) -> f32 {
    if count == 0 || max_count == 0 { return 0.0; }
    let r = size_max / 2.0 * ((count as f64 / max_count as f64).sqrt() as f32);
    r.max(2.0)
}
