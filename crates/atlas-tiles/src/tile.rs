//! Tile identifiers and image naming.
//!
//! A tile id is the path from the root to the tile: one digit per level,
//! `1`=NW, `2`=NE, `3`=SW, `4`=SE.  The root's path is empty and it is
//! named `root`.
//!
//! ```text
//! root ─┬─ 1 ─┬─ 11
//!       │     ├─ 12
//!       │     ├─ 13
//!       │     └─ 14
//!       ├─ 2
//!       ├─ 3
//!       └─ 4
//! ```
//!
//! Sibling ids sort west-to-east within a row, so ordering a row of
//! same-depth tiles by id is ordering them by longitude.

use std::fmt;

use atlas_core::config::MAX_SUPPORTED_DEPTH;
use atlas_core::MapConfig;

use crate::{TileError, TileResult};

/// Name of the tile with the empty path.
pub const ROOT_NAME: &str = "root";

/// Path string of a quadtree tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct TileId(String);

impl TileId {
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse a tile name: `"root"` (or the empty string) or a path of
    /// digits `1`-`4` no deeper than any buildable tree.
    pub fn parse(name: &str) -> TileResult<Self> {
        if name == ROOT_NAME {
            return Ok(Self::root());
        }
        if name.len() <= usize::from(MAX_SUPPORTED_DEPTH)
            && name.bytes().all(|b| (b'1'..=b'4').contains(&b))
        {
            Ok(Self(name.to_string()))
        } else {
            Err(TileError::InvalidTileId(name.to_string()))
        }
    }

    /// Id of child `quadrant` (0=NW, 1=NE, 2=SW, 3=SE).
    pub(crate) fn child(&self, quadrant: usize) -> Self {
        debug_assert!(quadrant < 4);
        let mut path = String::with_capacity(self.0.len() + 1);
        path.push_str(&self.0);
        path.push(char::from(b'1' + quadrant as u8));
        Self(path)
    }

    pub fn parent(&self) -> Option<Self> {
        let mut path = self.0.clone();
        path.pop().map(|_| Self(path))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Level of the tile; the root is depth 0.
    pub fn depth(&self) -> u8 {
        self.0.len() as u8
    }

    /// The raw path, empty for the root.
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Child indices (0..4) from the root down to this tile.
    pub(crate) fn quadrants(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.bytes().map(|b| usize::from(b - b'1'))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() { f.write_str(ROOT_NAME) } else { f.write_str(&self.0) }
    }
}

impl From<TileId> for String {
    fn from(id: TileId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TileId {
    type Error = TileError;

    fn try_from(name: String) -> TileResult<Self> {
        Self::parse(&name)
    }
}

// ── TileNaming ────────────────────────────────────────────────────────────────

/// Resolves tile ids to image file paths: `{image_root}{name}.{ext}`.
#[derive(Clone, Debug, PartialEq)]
pub struct TileNaming {
    pub image_root: String,
    pub image_ext: String,
}

impl TileNaming {
    pub fn new(image_root: impl Into<String>, image_ext: impl Into<String>) -> Self {
        Self { image_root: image_root.into(), image_ext: image_ext.into() }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(config.image_root.clone(), config.image_ext.clone())
    }

    pub fn image_path(&self, id: &TileId) -> String {
        format!("{}{}.{}", self.image_root, id, self.image_ext)
    }
}

impl Default for TileNaming {
    fn default() -> Self {
        Self::from_config(&MapConfig::default())
    }
}
