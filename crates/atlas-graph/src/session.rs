//! Stateful multi-stop routing.
//!
//! An [`ItinerarySession`] holds the one itinerary a user is currently
//! editing: its start and end vertices plus an ordered list of waypoints.
//! All mutating methods take `&mut self`, so a session has exactly one
//! writer at a time; a service that shares a session between requests must
//! wrap it in its own lock.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──plan()──▶ active ──clear()──▶ empty
//!                   │    ▲
//!                   └────┘ add_stop(), plan()
//! ```
//!
//! [`clear`](ItinerarySession::clear) is the only call that drops
//! waypoints; re-planning moves the start and end but keeps the stops.
//!
//! # Joints
//!
//! A multi-stop route is the concatenation of per-leg shortest paths, and
//! every leg includes both of its endpoints.  The vertex where one leg ends
//! and the next begins therefore appears twice in a row.  The duplicate is
//! kept so output matches the leg-by-leg computation exactly.

use tracing::debug;

use atlas_core::{GeoPoint, VertexId};

use crate::graph::SpatialGraph;
use crate::router::{snap, DijkstraRouter, Route, Router};
use crate::{GraphError, GraphResult};

/// One itinerary under construction.
pub struct ItinerarySession<R: Router = DijkstraRouter> {
    router: R,
    start:  Option<VertexId>,
    end:    Option<VertexId>,
    stops:  Vec<VertexId>,
}

impl ItinerarySession<DijkstraRouter> {
    /// Empty session routing with [`DijkstraRouter`].
    pub fn new() -> Self {
        Self::with_router(DijkstraRouter)
    }
}

impl Default for ItinerarySession<DijkstraRouter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Router> ItinerarySession<R> {
    pub fn with_router(router: R) -> Self {
        Self { router, start: None, end: None, stops: Vec::new() }
    }

    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    pub fn end(&self) -> Option<VertexId> {
        self.end
    }

    /// Waypoints in visiting order.
    pub fn stops(&self) -> &[VertexId] {
        &self.stops
    }

    /// `true` once [`plan`](Self::plan) has fixed a start and end.
    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Set the itinerary's start and end to the vertices nearest to `start`
    /// and `dest` and return the direct route between them.
    ///
    /// Waypoints already added are kept; call [`clear`](Self::clear) first
    /// to start over.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] if there is no vertex to snap to, and
    /// [`GraphError::NonFiniteCoordinate`] for a NaN or infinite coordinate.
    pub fn plan(&mut self, graph: &SpatialGraph, start: GeoPoint, dest: GeoPoint) -> GraphResult<Route> {
        let from = snap(graph, start)?;
        let to = snap(graph, dest)?;

        self.start = Some(from);
        self.end = Some(to);

        let route = self.router.shortest_path(graph, from, to);
        debug!(%from, %to, hops = route.vertices.len(), "planned itinerary");
        Ok(route)
    }

    /// Add the vertex nearest to `stop` as a waypoint and return the full
    /// route start → stop₁ → … → stopₙ → end.  Its weight is the sum of the
    /// leg weights.
    ///
    /// Waypoints stay sorted by planar distance from the start vertex; a new
    /// stop at the same distance as existing ones goes after them.  A leg
    /// with no path contributes nothing, and the remaining legs are still
    /// appended.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NoActiveItinerary`] before [`plan`](Self::plan).
    /// - [`GraphError::EmptyGraph`] if there is no vertex to snap to.
    /// - [`GraphError::NonFiniteCoordinate`] for a NaN or infinite `stop`.
    /// - [`GraphError::UnknownVertex`] if a session vertex has since been
    ///   removed from `graph`.
    pub fn add_stop(&mut self, graph: &SpatialGraph, stop: GeoPoint) -> GraphResult<Route> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(GraphError::NoActiveItinerary);
        };
        let new_stop = snap(graph, stop)?;

        let origin = point_of(graph, start)?;
        let new_dist = point_of(graph, new_stop)?.distance(origin);

        let mut at = self.stops.len();
        for (i, &existing) in self.stops.iter().enumerate() {
            if point_of(graph, existing)?.distance(origin) > new_dist {
                at = i;
                break;
            }
        }
        self.stops.insert(at, new_stop);
        debug!(stop = %new_stop, position = at, stops = self.stops.len(), "added waypoint");

        let mut legs = Vec::with_capacity(self.stops.len() + 2);
        legs.push(start);
        legs.extend_from_slice(&self.stops);
        legs.push(end);

        let mut itinerary = Route::unreachable();
        for leg in legs.windows(2) {
            let route = self.router.shortest_path(graph, leg[0], leg[1]);
            itinerary.vertices.extend(route.vertices);
            itinerary.weight += route.weight;
        }
        Ok(itinerary)
    }

    /// Forget the start, end, and all waypoints.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
        self.stops.clear();
    }
}

fn point_of(graph: &SpatialGraph, id: VertexId) -> GraphResult<GeoPoint> {
    graph
        .get_vertex(id)
        .map(|v| v.point)
        .ok_or(GraphError::UnknownVertex(id))
}
