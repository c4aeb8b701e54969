//! `atlas-core` — foundational types shared by every `atlas-*` crate.
//!
//! This crate has no `atlas-*` dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `VertexId`                                             |
//! | [`geo`]      | `GeoPoint`, `Rect`, planar Euclidean distance          |
//! | [`config`]   | `MapConfig` (root extents, tile size, quadtree depth)  |
//! | [`error`]    | `AtlasError`, `AtlasResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::MapConfig;
pub use error::{AtlasError, AtlasResult};
pub use geo::{GeoPoint, Rect};
pub use ids::VertexId;
