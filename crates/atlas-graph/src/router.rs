//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! [`ItinerarySession`](crate::ItinerarySession) calls routing through the
//! [`Router`] trait, so an A* or contraction-hierarchy implementation can be
//! swapped in without touching the session logic.
//!
//! # Cost units
//!
//! Edge weights are planar distances in degrees (see `atlas_core::geo`), so
//! `Route::weight` is a path length in degrees as well.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use atlas_core::{GeoPoint, VertexId};

use crate::graph::SpatialGraph;
use crate::{GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Vertices to visit in order, start and end included.  Empty when the
    /// end is unreachable.
    pub vertices: Vec<VertexId>,
    /// Sum of edge weights along `vertices`.
    pub weight: f64,
}

impl Route {
    /// The "no path" result.
    pub fn unreachable() -> Self {
        Self { vertices: Vec::new(), weight: 0.0 }
    }

    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// `true` if start and end are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router {
    /// Shortest path from `from` to `to`.
    ///
    /// Returns [`Route::unreachable`] if no path exists or either endpoint is
    /// absent from the graph.  `from == to` yields a single-vertex route.
    fn shortest_path(&self, graph: &SpatialGraph, from: VertexId, to: VertexId) -> Route;

    /// Snap both coordinates to their nearest vertices, then route.
    ///
    /// # Errors
    ///
    /// See [`snap`].
    fn route_between(&self, graph: &SpatialGraph, start: GeoPoint, dest: GeoPoint) -> GraphResult<Route> {
        let from = snap(graph, start)?;
        let to = snap(graph, dest)?;
        Ok(self.shortest_path(graph, from, to))
    }
}

/// The vertex nearest to `pos`.
///
/// # Errors
///
/// - [`GraphError::NonFiniteCoordinate`] if `pos` has a NaN or infinite part.
/// - [`GraphError::EmptyGraph`] if there is no vertex to snap to.
pub fn snap(graph: &SpatialGraph, pos: GeoPoint) -> GraphResult<VertexId> {
    if !pos.is_finite() {
        return Err(GraphError::NonFiniteCoordinate(pos));
    }
    graph.closest(pos).ok_or(GraphError::EmptyGraph)
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra with a binary-heap frontier and early exit when the
/// destination is settled.
///
/// Frontier entries with equal distance pop in insertion order, so results
/// are reproducible between runs on the same graph.
#[derive(Debug, Default, Clone, Copy)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, graph: &SpatialGraph, from: VertexId, to: VertexId) -> Route {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first, then the earliest-pushed entry among equal costs.
struct FrontierEntry {
    cost: f64,
    seq: u64,
    vertex: VertexId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

fn dijkstra(graph: &SpatialGraph, from: VertexId, to: VertexId) -> Route {
    if !graph.contains(from) || !graph.contains(to) {
        return Route::unreachable();
    }
    if from == to {
        return Route { vertices: vec![from], weight: 0.0 };
    }

    // dist[v] = best known cost; absent means +inf.
    let mut dist: FxHashMap<VertexId, f64> = FxHashMap::default();
    let mut prev: FxHashMap<VertexId, VertexId> = FxHashMap::default();
    let mut settled: FxHashSet<VertexId> = FxHashSet::default();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut seq = 0u64;

    dist.insert(from, 0.0);
    frontier.push(FrontierEntry { cost: 0.0, seq, vertex: from });

    while let Some(FrontierEntry { cost, vertex, .. }) = frontier.pop() {
        if vertex == to {
            return reconstruct(&prev, from, to, cost);
        }

        // Stale entry: a cheaper copy was already settled.
        if !settled.insert(vertex) {
            continue;
        }

        // A dangling destination has no slot and therefore no way onward.
        let Some(edges) = graph.edges_from(vertex) else {
            continue;
        };

        for edge in edges {
            if settled.contains(&edge.to) {
                continue;
            }
            let candidate = cost + edge.weight;
            let known = dist.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                dist.insert(edge.to, candidate);
                prev.insert(edge.to, vertex);
                seq += 1;
                frontier.push(FrontierEntry { cost: candidate, seq, vertex: edge.to });
            }
        }
    }

    Route::unreachable()
}

fn reconstruct(
    prev: &FxHashMap<VertexId, VertexId>,
    from: VertexId,
    to: VertexId,
    weight: f64,
) -> Route {
    let mut vertices = vec![to];
    let mut cur = to;
    while cur != from {
        match prev.get(&cur) {
            Some(&p) => {
                vertices.push(p);
                cur = p;
            }
            None => return Route::unreachable(),
        }
    }
    vertices.reverse();
    Route { vertices, weight }
}

/// Total weight of walking `path` over existing edges, taking the cheapest
/// edge where a hop has parallel edges.
///
/// Returns `None` if any consecutive pair is not joined by an edge.  An
/// empty or single-vertex path weighs zero.
pub fn path_weight(graph: &SpatialGraph, path: &[VertexId]) -> Option<f64> {
    let mut total = 0.0;
    for hop in path.windows(2) {
        let (a, b) = (hop[0], hop[1]);
        if a == b {
            // Segment joints of a multi-stop itinerary repeat a vertex.
            continue;
        }
        let w = graph
            .edges_from(a)?
            .iter()
            .filter(|e| e.to == b)
            .map(|e| e.weight)
            .min_by(f64::total_cmp)?;
        total += w;
    }
    Some(total)
}
