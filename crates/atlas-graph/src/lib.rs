//! `atlas-graph` — road graph, construction, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`graph`]   | `SpatialGraph`, `Vertex`, `Edge`                             |
//! | [`builder`] | `GraphBuilder`, `MapEvent`, `MapData`, `Place`               |
//! | [`router`]  | `Router` trait, `Route`, `DijkstraRouter`, `snap`            |
//! | [`session`] | `ItinerarySession` — stateful multi-stop routing             |
//! | [`osm`]     | `load_from_pbf` (feature = `"osm"` only)                     |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.              |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod builder;
pub mod error;
pub mod graph;
pub mod router;
pub mod session;

#[cfg(feature = "osm")]
pub mod osm;


pub use builder::{GraphBuilder, MapData, MapEvent, Place, VertexEvent, WayEvent};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, SpatialGraph, Vertex};
pub use router::{path_weight, snap, DijkstraRouter, Route, Router};
pub use session::ItinerarySession;
