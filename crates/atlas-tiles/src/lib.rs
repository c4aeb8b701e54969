//! `atlas-tiles` — which pre-rendered map tiles to draw for a viewport.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`quadtree`] | `TileQuadtree`, `QuadNode` — eager fixed-depth tile tree    |
//! | [`raster`]   | `RasterRequest`, `RasterResponse`, `RasterGrid`             |
//! | [`tile`]     | `TileId` path strings, `TileNaming` image paths             |
//! | [`error`]    | `TileError`, `TileResult<T>`                                |
//!
//! # Example
//!
//! ```
//! use atlas_core::MapConfig;
//! use atlas_tiles::{RasterRequest, TileQuadtree};
//!
//! let config = MapConfig::default();
//! let tree = TileQuadtree::new(&config).unwrap();
//!
//! // The whole map in a 300 px wide viewport needs the depth-1 tiles.
//! let resp = tree.search(&RasterRequest::from_rect(config.root, 300.0));
//! let grid = resp.grid.unwrap();
//! assert_eq!(grid.depth, 1);
//! assert_eq!(grid.image_paths(tree.naming())[0], ["img/1.png", "img/2.png"]);
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on requests and responses.|

pub mod error;
pub mod quadtree;
pub mod raster;
pub mod tile;


pub use error::{TileError, TileResult};
pub use quadtree::{QuadNode, TileQuadtree};
pub use raster::{RasterGrid, RasterRequest, RasterResponse};
pub use tile::{TileId, TileNaming};
