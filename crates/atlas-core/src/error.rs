//! Core error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `TileError`) and
//! wrap `AtlasError` as one variant where configuration problems can surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `atlas-core`.
pub type AtlasResult<T> = Result<T, AtlasError>;
