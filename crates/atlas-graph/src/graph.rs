//! Road graph representation.
//!
//! # Data layout
//!
//! Vertices and their outgoing edge lists live together in one ordered map
//! keyed by [`VertexId`]:
//!
//! ```text
//! slots: BTreeMap<VertexId, Slot { vertex, out: Vec<Edge> }>
//! ```
//!
//! Keeping both in the same entry means a vertex can never exist without an
//! adjacency list or vice versa.  The map is ordered so that iteration, and
//! therefore tie-breaking in [`SpatialGraph::closest`], is ascending by id.
//!
//! # Looseness
//!
//! [`SpatialGraph::add_edge`] only checks that the edge's **source** exists,
//! and [`SpatialGraph::remove_vertex`] does not purge edges elsewhere that
//! point at the removed vertex.  [`SpatialGraph::clean`] never creates such
//! dangling edges; other callers must not rely on either method to keep the
//! graph closed.  [`GraphBuilder`](crate::GraphBuilder) validates both
//! endpoints before inserting.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use tracing::debug;

use atlas_core::{GeoPoint, VertexId};

use crate::{GraphError, GraphResult};

// ── Vertex / Edge ─────────────────────────────────────────────────────────────

/// A map point that roads may pass through.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub id: VertexId,
    pub point: GeoPoint,
    /// Display name from the map feed, if the point is a named place.
    pub name: Option<String>,
}

impl Vertex {
    pub fn new(id: VertexId, lat: f64, lon: f64) -> Self {
        Self { id, point: GeoPoint::new(lat, lon), name: None }
    }

    pub fn named(id: VertexId, lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self { id, point: GeoPoint::new(lat, lon), name: Some(name.into()) }
    }
}

/// A directed arc between two vertices.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    /// Planar distance between the endpoints, in degrees.  Never negative.
    pub weight: f64,
    /// Street name of the way this edge came from.
    pub name: Option<String>,
    /// Raw `maxspeed` tag of the way (e.g. `"25 mph"`), uninterpreted.
    pub max_speed: Option<String>,
}

impl Edge {
    /// Edge from `from` to `to` weighted by the distance between them.
    pub fn between(from: &Vertex, to: &Vertex) -> Self {
        Self {
            from: from.id,
            to: to.id,
            weight: from.point.distance(to.point),
            name: None,
            max_speed: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_max_speed(mut self, max_speed: Option<String>) -> Self {
        self.max_speed = max_speed;
        self
    }
}

// ── SpatialGraph ──────────────────────────────────────────────────────────────

struct Slot {
    vertex: Vertex,
    out: Vec<Edge>,
}

/// Directed road graph with per-vertex outgoing edge lists.
#[derive(Default)]
pub struct SpatialGraph {
    slots: BTreeMap<VertexId, Slot>,
    edge_count: usize,
}

impl SpatialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `vertex` with an empty outgoing edge list.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateVertex`] if the id is already present; the
    /// existing vertex is left untouched.
    pub fn add_vertex(&mut self, vertex: Vertex) -> GraphResult<()> {
        use std::collections::btree_map::Entry;

        match self.slots.entry(vertex.id) {
            Entry::Occupied(_) => Err(GraphError::DuplicateVertex(vertex.id)),
            Entry::Vacant(e) => {
                e.insert(Slot { vertex, out: Vec::new() });
                Ok(())
            }
        }
    }

    /// Append `edge` to its source vertex's outgoing list.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if the source is absent.  The
    /// destination is not checked (see the module docs).
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<()> {
        let slot = self
            .slots
            .get_mut(&edge.from)
            .ok_or(GraphError::UnknownVertex(edge.from))?;
        slot.out.push(edge);
        self.edge_count += 1;
        Ok(())
    }

    /// Delete a vertex together with its outgoing edges.
    ///
    /// Edges in other vertices' lists that point at `id` are kept.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        let slot = self.slots.remove(&id)?;
        self.edge_count -= slot.out.len();
        Some(slot.vertex)
    }

    /// Remove every vertex that has no outgoing edges and is not the
    /// destination of any edge.  Returns how many vertices were removed.
    ///
    /// Run once after bulk construction.  O(V + E).
    pub fn clean(&mut self) -> usize {
        let mut candidates: Vec<VertexId> = Vec::new();
        let mut used: FxHashSet<VertexId> = FxHashSet::default();

        for (id, slot) in &self.slots {
            if slot.out.is_empty() {
                candidates.push(*id);
            }
            used.extend(slot.out.iter().map(|e| e.to));
        }

        let mut removed = 0;
        for id in candidates {
            if !used.contains(&id) && self.remove_vertex(id).is_some() {
                removed += 1;
            }
        }

        debug!(removed, remaining = self.slots.len(), "removed isolated vertices");
        removed
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(&id).map(|s| &s.vertex)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Outgoing edges of `id`, or `None` if the vertex is absent.
    pub fn edges_from(&self, id: VertexId) -> Option<&[Edge]> {
        self.slots.get(&id).map(|s| s.out.as_slice())
    }

    /// All vertices.  Callers should treat the order as unspecified; this
    /// implementation yields them in ascending id order.
    pub fn all_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.slots.values().map(|s| &s.vertex)
    }

    pub fn lat(&self, id: VertexId) -> Option<f64> {
        self.get_vertex(id).map(|v| v.point.lat)
    }

    pub fn lon(&self, id: VertexId) -> Option<f64> {
        self.get_vertex(id).map(|v| v.point.lon)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Id of the vertex nearest to `pos` by planar distance.
    ///
    /// Linear scan.  Ties go to the vertex met first, i.e. the smallest id.
    /// Returns `None` if the graph has no vertices or `pos` is not finite.
    pub fn closest(&self, pos: GeoPoint) -> Option<VertexId> {
        if !pos.is_finite() {
            return None;
        }
        let mut best: Option<(VertexId, f64)> = None;
        for v in self.all_vertices() {
            let d = v.point.distance(pos);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((v.id, d)),
            }
        }
        best.map(|(id, _)| id)
    }
}
