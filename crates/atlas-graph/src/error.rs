//! Graph-subsystem error type.

use thiserror::Error;

use atlas_core::{GeoPoint, VertexId};

/// Errors produced by `atlas-graph`.
///
/// Unreachable destinations are not errors: routing returns an empty
/// [`Route`](crate::Route) instead.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} already exists in graph")]
    DuplicateVertex(VertexId),

    #[error("vertex {0} not found in graph")]
    UnknownVertex(VertexId),

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("coordinate {0} is not finite")]
    NonFiniteCoordinate(GeoPoint),

    #[error("no active itinerary: plan a route before adding stops")]
    NoActiveItinerary,

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
