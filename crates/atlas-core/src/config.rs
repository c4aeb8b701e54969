//! Map configuration.
//!
//! Typically loaded from a JSON file by the application crate and passed to
//! the tile quadtree at startup.  The defaults describe the reference map
//! extract the tile images were rendered for.

use crate::{AtlasError, AtlasResult, Rect};

/// Deepest quadtree accepted by [`MapConfig::validate`].  At depth 12 the
/// tree already holds ~22 million nodes.
pub const MAX_SUPPORTED_DEPTH: u8 = 12;

// Reference map extents.
pub const ROOT_ULLAT: f64 = 37.892195547244356;
pub const ROOT_ULLON: f64 = -122.2998046875;
pub const ROOT_LRLAT: f64 = 37.82280243352756;
pub const ROOT_LRLON: f64 = -122.2119140625;

/// Static description of the tiled map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    /// Rectangle covered by the root tile.
    pub root: Rect,

    /// Width (and height) of every tile image in pixels.  Default: 256.
    pub tile_size_px: f64,

    /// Depth of the deepest tiles.  Root is depth 0.  Default: 7.
    pub max_depth: u8,

    /// Directory prefix prepended to tile image names.  Default: `"img/"`.
    pub image_root: String,

    /// Tile image file extension without the dot.  Default: `"png"`.
    pub image_ext: String,
}

impl MapConfig {
    /// Reject configurations the quadtree cannot be built from.
    pub fn validate(&self) -> AtlasResult<()> {
        if !self.root.is_well_formed() || self.root.width() <= 0.0 || self.root.height() <= 0.0 {
            return Err(AtlasError::Config(format!(
                "root rectangle {} must have ul above and left of lr",
                self.root
            )));
        }
        if !(self.tile_size_px.is_finite() && self.tile_size_px > 0.0) {
            return Err(AtlasError::Config(format!(
                "tile_size_px must be positive, got {}",
                self.tile_size_px
            )));
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(AtlasError::Config(format!(
                "max_depth {} exceeds the supported maximum {}",
                self.max_depth, MAX_SUPPORTED_DEPTH
            )));
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            root: Rect::new(ROOT_ULLAT, ROOT_ULLON, ROOT_LRLAT, ROOT_LRLON),
            tile_size_px: 256.0,
            max_depth: 7,
            image_root: "img/".to_string(),
            image_ext: "png".to_string(),
        }
    }
}
