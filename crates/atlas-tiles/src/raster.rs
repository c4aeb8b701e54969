//! Raster query and response types.
//!
//! With the `serde` feature a [`RasterResponse`] serializes to the flat
//! object map clients expect:
//!
//! ```text
//! {"query_success": false}
//! {"query_success": true, "render_grid": [["13","14"],["31","32"]],
//!  "raster_ul_lat": …, "raster_ul_lon": …,
//!  "raster_lr_lat": …, "raster_lr_lon": …, "depth": 2}
//! ```

use atlas_core::Rect;

use crate::tile::{TileId, TileNaming};

/// The area a client wants to display and the pixel width of its viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterRequest {
    pub ullat: f64,
    pub ullon: f64,
    pub lrlat: f64,
    pub lrlon: f64,
    /// Viewport width in pixels.
    pub w: f64,
}

impl RasterRequest {
    pub fn new(ullat: f64, ullon: f64, lrlat: f64, lrlon: f64, w: f64) -> Self {
        Self { ullat, ullon, lrlat, lrlon, w }
    }

    pub fn from_rect(rect: Rect, w: f64) -> Self {
        Self::new(rect.ul.lat, rect.ul.lon, rect.lr.lat, rect.lr.lon, w)
    }

    pub fn query_rect(&self) -> Rect {
        Rect::new(self.ullat, self.ullon, self.lrlat, self.lrlon)
    }

    /// Longitudinal distance per pixel the viewport needs.
    pub fn target_lon_dpp(&self) -> f64 {
        (self.lrlon - self.ullon) / self.w
    }

    /// A request can be answered when every value is finite, the width is
    /// positive, and the box is not inverted.  Zero-area boxes are valid.
    pub fn is_valid(&self) -> bool {
        self.w.is_finite() && self.w > 0.0 && self.query_rect().is_well_formed()
    }
}

/// Tiles covering a query, row-major from the north-west corner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterGrid {
    pub render_grid: Vec<Vec<TileId>>,
    pub raster_ul_lat: f64,
    pub raster_ul_lon: f64,
    pub raster_lr_lat: f64,
    pub raster_lr_lon: f64,
    pub depth: u8,
}

impl RasterGrid {
    pub fn rows(&self) -> usize {
        self.render_grid.len()
    }

    pub fn cols(&self) -> usize {
        self.render_grid.first().map_or(0, Vec::len)
    }

    /// Rectangle covered by the whole grid.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.raster_ul_lat, self.raster_ul_lon, self.raster_lr_lat, self.raster_lr_lon)
    }

    /// All tile ids in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &TileId> + '_ {
        self.render_grid.iter().flatten()
    }

    /// The grid with every tile id resolved to its image path.
    pub fn image_paths(&self, naming: &TileNaming) -> Vec<Vec<String>> {
        self.render_grid
            .iter()
            .map(|row| row.iter().map(|id| naming.image_path(id)).collect())
            .collect()
    }
}

/// Outcome of a raster query.  `grid` is `None` exactly when
/// `query_success` is `false`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterResponse {
    pub query_success: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub grid: Option<RasterGrid>,
}

impl RasterResponse {
    pub fn failure() -> Self {
        Self { query_success: false, grid: None }
    }

    pub fn success(grid: RasterGrid) -> Self {
        Self { query_success: true, grid: Some(grid) }
    }
}
