//! OSM PBF loader, enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use atlas_graph::osm::load_from_pbf;
//!
//! let map = load_from_pbf(Path::new("berkeley.osm.pbf"))?;
//! let cafes = map.search("top dog");
//! ```
//!
//! # What is loaded
//!
//! Every node becomes a vertex (named nodes are also indexed as places), and
//! every way whose `highway` tag is routable (see
//! [`ROUTABLE_HIGHWAYS`](crate::builder::ROUTABLE_HIGHWAYS)) becomes edges.
//! `oneway=yes|1|true` adds only the forward direction.  Cleanup then drops
//! every vertex no road touches.
//!
//! # Clipped extracts
//!
//! Extracts cut along a bounding box keep ways that run past the edge, so a
//! way may reference nodes the file does not contain.  Such a way is split at
//! the missing nodes and each remaining run of two or more known nodes is
//! added on its own.

use std::path::Path;

use osmpbf::{Element, ElementReader};
use rustc_hash::FxHashSet;
use tracing::{info, warn};

use atlas_core::{GeoPoint, VertexId};

use crate::builder::{is_oneway_tag, GraphBuilder, MapData, VertexEvent, WayEvent};
use crate::{GraphError, GraphResult};

// ── Public entry point ────────────────────────────────────────────────────────

/// Load a road graph and place index from an OSM PBF file.
///
/// # Errors
///
/// [`GraphError::Osm`] on file or parse errors, and
/// [`GraphError::DuplicateVertex`] if the file repeats a node id.
pub fn load_from_pbf(path: &Path) -> GraphResult<MapData> {
    let reader = ElementReader::from_path(path).map_err(|e| GraphError::Osm(e.to_string()))?;

    // ── Phase 1: vertices go straight into the builder, ways are buffered ──
    let mut builder = GraphBuilder::new();
    let mut known: FxHashSet<VertexId> = FxHashSet::default();
    let mut ways: Vec<WayEvent> = Vec::new();
    let mut first_err: Option<GraphError> = None;

    reader
        .for_each(|elem| {
            if first_err.is_some() {
                return;
            }
            let vertex = match elem {
                Element::Node(n) => Some(vertex_event(n.id(), n.lat(), n.lon(), n.tags())),
                Element::DenseNode(n) => Some(vertex_event(n.id(), n.lat(), n.lon(), n.tags())),
                Element::Way(w) => {
                    // Collect tags eagerly so &str lifetimes don't escape the closure.
                    let tags: Vec<(&str, &str)> = w.tags().collect();
                    ways.push(way_event(w.id(), &tags, w.refs()));
                    None
                }
                _ => None,
            };
            if let Some(v) = vertex {
                known.insert(v.id);
                if let Err(e) = builder.add_vertex(v) {
                    first_err = Some(e);
                }
            }
        })
        .map_err(|e| GraphError::Osm(e.to_string()))?;

    if let Some(e) = first_err {
        return Err(e);
    }

    // ── Phase 2: edges ────────────────────────────────────────────────────
    let mut clipped = 0usize;
    for way in ways {
        if !way.is_routable() {
            continue;
        }
        if way.refs.iter().all(|id| known.contains(id)) {
            builder.add_way(way)?;
            continue;
        }

        clipped += 1;
        for run in way.refs.split(|id| !known.contains(id)) {
            if run.len() < 2 {
                continue;
            }
            builder.add_way(WayEvent { refs: run.to_vec(), ..way.clone() })?;
        }
    }
    if clipped > 0 {
        warn!(clipped, "ways referenced nodes missing from the extract");
    }

    let map = builder.finish();
    info!(path = %path.display(), "loaded OSM extract");
    Ok(map)
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

fn vertex_event<'a>(
    id: i64,
    lat: f64,
    lon: f64,
    tags: impl Iterator<Item = (&'a str, &'a str)>,
) -> VertexEvent {
    let name = tags
        .filter(|(k, _)| *k == "name")
        .map(|(_, v)| v.to_string())
        .next();
    VertexEvent { id: VertexId(id), point: GeoPoint::new(lat, lon), name }
}

fn way_event(id: i64, tags: &[(&str, &str)], refs: impl Iterator<Item = i64>) -> WayEvent {
    let tag = |key: &str| {
        tags.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    };
    WayEvent {
        id,
        highway:   tag("highway"),
        max_speed: tag("maxspeed"),
        name:      tag("name"),
        one_way:   tags.iter().any(|(k, v)| *k == "oneway" && is_oneway_tag(v)),
        refs:      refs.map(VertexId).collect(),
    }
}
