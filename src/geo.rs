//! Map geometry: markers derived from room pins and the visible viewport.

use crate::api::RoomPin;
use tracing::{debug, warn};

/// Fraction of the marker span added on each side when fitting
const FIT_PADDING: f64 = 0.10;
/// Smallest span (degrees) a fitted viewport may have
const MIN_SPAN: f64 = 0.01;
/// Zoom step factor for zoom in/out
const ZOOM_FACTOR: f64 = 1.5;

/// One room's position on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub room_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub label: Option<String>,
}

impl Marker {
    /// Text drawn next to the marker
    pub fn caption(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| crate::utils::short_id(&self.room_id))
    }
}

fn valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// One marker per pin with a usable coordinate, in input order
pub fn derive_markers(pins: &[RoomPin]) -> Vec<Marker> {
    pins.iter()
        .filter(|pin| {
            let ok = valid_coordinate(pin.latitude, pin.longitude);
            if !ok {
                warn!(
                    "Skipping room {} with invalid coordinate ({}, {})",
                    pin.room_id, pin.latitude, pin.longitude
                );
            }
            ok
        })
        .map(|pin| Marker {
            room_id: pin.room_id.clone(),
            latitude: pin.latitude,
            longitude: pin.longitude,
            label: pin.label.clone(),
        })
        .collect()
}

/// Visible lat/lon rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::world()
    }
}

/// Center/half-span pair clamped into `[lo, hi]`
fn clamp_axis(center: f64, half: f64, lo: f64, hi: f64) -> (f64, f64) {
    let half = half.min((hi - lo) / 2.0);
    let center = center.clamp(lo + half, hi - half);
    (center - half, center + half)
}

impl Viewport {
    pub fn world() -> Self {
        Self {
            min_lat: -90.0,
            max_lat: 90.0,
            min_lon: -180.0,
            max_lon: 180.0,
        }
    }

    /// Smallest padded viewport containing every marker; `None` for no markers
    pub fn fit(markers: &[Marker]) -> Option<Self> {
        let first = markers.first()?;
        let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
        let (mut min_lon, mut max_lon) = (first.longitude, first.longitude);
        for m in &markers[1..] {
            min_lat = min_lat.min(m.latitude);
            max_lat = max_lat.max(m.latitude);
            min_lon = min_lon.min(m.longitude);
            max_lon = max_lon.max(m.longitude);
        }

        let lat_half = (max_lat - min_lat).max(MIN_SPAN) * (0.5 + FIT_PADDING);
        let lon_half = (max_lon - min_lon).max(MIN_SPAN) * (0.5 + FIT_PADDING);
        let (min_lat, max_lat) = clamp_axis((min_lat + max_lat) / 2.0, lat_half, -90.0, 90.0);
        let (min_lon, max_lon) = clamp_axis((min_lon + max_lon) / 2.0, lon_half, -180.0, 180.0);

        Some(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Scale around the center; `factor < 1` zooms in
    pub fn scaled(&self, factor: f64) -> Self {
        let (lat, lon) = self.center();
        let lat_half = ((self.max_lat - self.min_lat) * factor / 2.0).max(MIN_SPAN / 2.0);
        let lon_half = ((self.max_lon - self.min_lon) * factor / 2.0).max(MIN_SPAN / 2.0);
        let (min_lat, max_lat) = clamp_axis(lat, lat_half, -90.0, 90.0);
        let (min_lon, max_lon) = clamp_axis(lon, lon_half, -180.0, 180.0);
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Canvas x bounds (longitude)
    pub fn x_bounds(&self) -> [f64; 2] {
        [self.min_lon, self.max_lon]
    }

    /// Canvas y bounds (latitude)
    pub fn y_bounds(&self) -> [f64; 2] {
        [self.min_lat, self.max_lat]
    }
}

/// Markers for the current room set plus the viewport fitted to them.
///
/// The viewport is re-fitted exactly once per change of the room set.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    viewport: Viewport,
    fit_count: usize,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the room set. Returns `true` if it differed from the current one.
    ///
    /// Sets are compared by their markers, so pins with invalid coordinates
    /// never make an identical set look changed.
    pub fn set_rooms(&mut self, pins: Vec<RoomPin>) -> bool {
        let markers = derive_markers(&pins);
        if markers == self.markers && (self.fit_count > 0 || markers.is_empty()) {
            return false;
        }

        self.markers = markers;

        match Viewport::fit(&self.markers) {
            Some(viewport) => {
                self.viewport = viewport;
                self.fit_count += 1;
                debug!(
                    "Fitted viewport to {} markers (fit #{})",
                    self.markers.len(),
                    self.fit_count
                );
            }
            None => self.viewport = Viewport::world(),
        }
        true
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// How many times the viewport was fitted to the room set
    pub fn fit_count(&self) -> usize {
        self.fit_count
    }

    pub fn zoom_in(&mut self) {
        self.viewport = self.viewport.scaled(1.0 / ZOOM_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.viewport = self.viewport.scaled(ZOOM_FACTOR);
    }
}
