//! Event-driven graph construction.
//!
//! A map-feed parser (OSM XML, OSM PBF, a test fixture…) turns its input into
//! a stream of [`MapEvent`]s; [`GraphBuilder`] consumes them and produces a
//! [`MapData`]: the cleaned [`SpatialGraph`] plus a [`PrefixIndex`] of named
//! places.
//!
//! # Events
//!
//! | Event    | Effect                                                          |
//! |----------|-----------------------------------------------------------------|
//! | `Vertex` | Adds a vertex; a named vertex is also indexed as a [`Place`]    |
//! | `Way`    | Adds one edge per consecutive vertex pair (plus the reverse one unless one-way) if the highway type is routable |
//!
//! Vertices must arrive before the ways that reference them.  A way that
//! names an undeclared vertex fails the build.
//!
//! # Example
//!
//! ```
//! use atlas_core::VertexId;
//! use atlas_graph::{GraphBuilder, VertexEvent, WayEvent};
//!
//! let mut b = GraphBuilder::new();
//! b.add_vertex(VertexEvent::new(VertexId(1), 37.870, -122.260)).unwrap();
//! b.add_vertex(VertexEvent::new(VertexId(2), 37.871, -122.259)).unwrap();
//! b.add_vertex(VertexEvent::new(VertexId(3), 37.872, -122.258).with_name("Top Dog")).unwrap();
//! let added = b.add_way(WayEvent::new(7, "residential", [VertexId(1), VertexId(2)])).unwrap();
//! assert_eq!(added, 2); // two-way road
//! let map = b.finish();
//! assert_eq!(map.graph.vertex_count(), 2); // vertex 3 is isolated
//! assert_eq!(map.search("top").len(), 1);  // but still searchable
//! ```

use tracing::{debug, info};

use atlas_core::{GeoPoint, VertexId};
use atlas_search::PrefixIndex;

use crate::graph::{Edge, SpatialGraph, Vertex};
use crate::{GraphError, GraphResult};

/// `highway=*` values whose ways become graph edges.
pub const ROUTABLE_HIGHWAYS: [&str; 13] = [
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "unclassified",
    "residential",
    "living_street",
    "motorway_link",
    "trunk_link",
    "primary_link",
    "secondary_link",
    "tertiary_link",
];

pub fn is_routable(highway: &str) -> bool {
    ROUTABLE_HIGHWAYS.contains(&highway)
}

/// `oneway=*` values that make a way one-directional.
pub fn is_oneway_tag(value: &str) -> bool {
    matches!(value, "yes" | "true" | "1")
}

// ── Events ────────────────────────────────────────────────────────────────────

/// A vertex declared by the map feed.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexEvent {
    pub id: VertexId,
    pub point: GeoPoint,
    pub name: Option<String>,
}

impl VertexEvent {
    pub fn new(id: VertexId, lat: f64, lon: f64) -> Self {
        Self { id, point: GeoPoint::new(lat, lon), name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A way (tagged polyline of vertex ids) declared by the map feed.
#[derive(Clone, Debug, PartialEq)]
pub struct WayEvent {
    pub id: i64,
    /// The `highway` tag, if present.  Ways without a routable value are
    /// discarded.
    pub highway: Option<String>,
    /// The `maxspeed` tag, copied verbatim onto every edge.
    pub max_speed: Option<String>,
    /// The `name` tag, copied onto every edge.
    pub name: Option<String>,
    pub one_way: bool,
    pub refs: Vec<VertexId>,
}

impl WayEvent {
    pub fn new(id: i64, highway: &str, refs: impl IntoIterator<Item = VertexId>) -> Self {
        Self {
            id,
            highway: Some(highway.to_string()),
            max_speed: None,
            name: None,
            one_way: false,
            refs: refs.into_iter().collect(),
        }
    }

    pub fn one_way(mut self) -> Self {
        self.one_way = true;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_max_speed(mut self, max_speed: impl Into<String>) -> Self {
        self.max_speed = Some(max_speed.into());
        self
    }

    pub fn is_routable(&self) -> bool {
        self.highway.as_deref().is_some_and(is_routable)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent {
    Vertex(VertexEvent),
    Way(WayEvent),
}

// ── Output ────────────────────────────────────────────────────────────────────

/// A named, located point returned by name search.
///
/// Places are copied out of the vertex stream, so they stay searchable even
/// when cleanup drops their vertex from the graph (a café node on no road).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub id: VertexId,
    pub name: String,
    pub point: GeoPoint,
}

/// Everything built from one map feed.
pub struct MapData {
    pub graph: SpatialGraph,
    pub places: PrefixIndex<Place>,
}

impl MapData {
    /// Places whose normalized name starts with the normalized `query`.
    /// Unordered; empty for queries shorter than two letters.
    pub fn search(&self, query: &str) -> Vec<&Place> {
        self.places.values_with_prefix(query)
    }

    /// The place indexed under exactly this name, if any.
    pub fn place(&self, name: &str) -> Option<&Place> {
        self.places.get(name)
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Consumes [`MapEvent`]s and assembles a [`MapData`].
#[derive(Default)]
pub struct GraphBuilder {
    graph:         SpatialGraph,
    places:        PrefixIndex<Place>,
    ways_accepted: usize,
    ways_skipped:  usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a complete event stream, stopping at the first error.
    pub fn from_events<I>(events: I) -> GraphResult<MapData>
    where
        I: IntoIterator<Item = MapEvent>,
    {
        let mut b = Self::new();
        for event in events {
            b.handle(event)?;
        }
        Ok(b.finish())
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: MapEvent) -> GraphResult<()> {
        match event {
            MapEvent::Vertex(v) => self.add_vertex(v),
            MapEvent::Way(w) => self.add_way(w).map(|_| ()),
        }
    }

    /// Add a vertex and index it by name if it has one.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateVertex`] if the id was declared before.
    pub fn add_vertex(&mut self, event: VertexEvent) -> GraphResult<()> {
        let VertexEvent { id, point, name } = event;
        self.graph.add_vertex(Vertex { id, point, name: name.clone() })?;
        if let Some(name) = name {
            self.places.insert(&name, Place { id, name: name.clone(), point });
        }
        Ok(())
    }

    /// Turn a way into edges.  Returns how many edges were added; a way whose
    /// highway type is not routable adds none.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if the way references an undeclared
    /// vertex.  No edge of the way is added in that case.
    pub fn add_way(&mut self, way: WayEvent) -> GraphResult<usize> {
        if !way.is_routable() {
            self.ways_skipped += 1;
            return Ok(0);
        }

        let mut ends: Vec<Vertex> = Vec::with_capacity(way.refs.len());
        for &id in &way.refs {
            let v = self.graph.get_vertex(id).ok_or(GraphError::UnknownVertex(id))?;
            ends.push(v.clone());
        }

        let mut added = 0;
        for pair in ends.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let forward = Edge::between(a, b)
                .with_name(way.name.clone())
                .with_max_speed(way.max_speed.clone());
            self.graph.add_edge(forward)?;
            added += 1;

            if !way.one_way {
                let reverse = Edge::between(b, a)
                    .with_name(way.name.clone())
                    .with_max_speed(way.max_speed.clone());
                self.graph.add_edge(reverse)?;
                added += 1;
            }
        }

        self.ways_accepted += 1;
        debug!(way = way.id, edges = added, "added way");
        Ok(added)
    }

    /// Run cleanup and hand over the finished graph and place index.
    pub fn finish(mut self) -> MapData {
        let removed = self.graph.clean();
        info!(
            vertices      = self.graph.vertex_count(),
            edges         = self.graph.edge_count(),
            removed,
            places        = self.places.len(),
            ways_accepted = self.ways_accepted,
            ways_skipped  = self.ways_skipped,
            "map graph built"
        );
        MapData { graph: self.graph, places: self.places }
    }
}
