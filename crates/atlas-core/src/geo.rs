//! Coordinates, rectangles, and the planar distance metric.
//!
//! # Metric
//!
//! All distances in `atlas` are **Euclidean in raw degrees**:
//!
//! ```text
//! d = sqrt((lat1 - lat2)^2 + (lon1 - lon2)^2)
//! ```
//!
//! This is a flat-plane approximation, not a great-circle distance.  It is
//! used for edge weights, nearest-vertex snapping, and waypoint ordering
//! alike, so all three agree with each other.
//!
//! # Rectangle orientation
//!
//! A [`Rect`] is stored as its upper-left and lower-right corners.  Latitude
//! decreases downward (`ul.lat >= lr.lat`) and longitude increases to the
//! right (`ul.lon <= lr.lon`).

use std::fmt;

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Planar Euclidean distance in degrees.
    #[inline]
    pub fn distance(self, other: GeoPoint) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle given by its upper-left and lower-right corners.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub ul: GeoPoint,
    pub lr: GeoPoint,
}

impl Rect {
    #[inline]
    pub fn new(ul_lat: f64, ul_lon: f64, lr_lat: f64, lr_lon: f64) -> Self {
        Self {
            ul: GeoPoint::new(ul_lat, ul_lon),
            lr: GeoPoint::new(lr_lat, lr_lon),
        }
    }

    /// Longitudinal extent in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.lr.lon - self.ul.lon
    }

    /// Latitudinal extent in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.ul.lat - self.lr.lat
    }

    /// Midpoint of both axes.
    #[inline]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.ul.lat + self.lr.lat) / 2.0,
            (self.ul.lon + self.lr.lon) / 2.0,
        )
    }

    /// `true` when all corners are finite and the corners are ordered
    /// (a zero-width or zero-height rectangle is still well formed).
    pub fn is_well_formed(&self) -> bool {
        self.ul.is_finite()
            && self.lr.is_finite()
            && self.ul.lat >= self.lr.lat
            && self.ul.lon <= self.lr.lon
    }

    /// Split at the midpoint into `[NW, NE, SW, SE]` quadrants.
    pub fn quadrants(&self) -> [Rect; 4] {
        let mid = self.center();
        [
            Rect::new(self.ul.lat, self.ul.lon, mid.lat, mid.lon),
            Rect::new(self.ul.lat, mid.lon, mid.lat, self.lr.lon),
            Rect::new(mid.lat, self.ul.lon, self.lr.lat, mid.lon),
            Rect::new(mid.lat, mid.lon, self.lr.lat, self.lr.lon),
        ]
    }

    /// Intersection test.  Two rectangles are disjoint only when one lies
    /// strictly above, below, left of, or right of the other; rectangles that
    /// share an edge or a corner intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let above = self.lr.lat > other.ul.lat;
        let below = self.ul.lat < other.lr.lat;
        let left = self.lr.lon < other.ul.lon;
        let right = self.ul.lon > other.lr.lon;
        !(above || below || left || right)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.ul, self.lr)
    }
}
