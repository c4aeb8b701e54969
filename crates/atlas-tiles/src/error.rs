//! Tile-subsystem error type.

use thiserror::Error;

use atlas_core::AtlasError;

/// Errors produced by `atlas-tiles`.
///
/// A raster query that matches no tile is not an error: it yields a
/// [`RasterResponse`](crate::RasterResponse) with `query_success: false`.
#[derive(Debug, Error)]
pub enum TileError {
    #[error(transparent)]
    Config(#[from] AtlasError),

    #[error("invalid tile id {0:?}: expected \"root\" or up to 12 digits 1-4")]
    InvalidTileId(String),
}

pub type TileResult<T> = Result<T, TileError>;
