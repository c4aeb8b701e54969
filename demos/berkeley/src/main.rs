//! berkeley — end-to-end demo of the atlas crates.
//!
//! Builds a small street map of downtown Berkeley, plans an itinerary with
//! waypoints, asks the tile quadtree which images cover the route's
//! surroundings, and runs a few place-name searches.
//!
//! ```text
//! berkeley [CONFIG.json] [EXTRACT.osm.pbf]
//! ```
//!
//! `CONFIG.json` is an optional `MapConfig` (missing fields take their
//! defaults).  An OSM extract is only accepted when built with `--features
//! osm`; otherwise the synthetic map from `network.rs` is used.  Set
//! `RUST_LOG=debug` to see the library's tracing output.

mod network;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use atlas_core::{GeoPoint, MapConfig, Rect};
use atlas_graph::{path_weight, ItinerarySession, MapData};
use atlas_tiles::{RasterRequest, TileQuadtree};

// ── Constants ─────────────────────────────────────────────────────────────────

const VIEWPORT_WIDTH_PX: f64 = 1_024.0;
/// Margin added around the route when choosing the raster box, in degrees.
const ROUTE_MARGIN_DEG:  f64 = 0.002;

const START: GeoPoint = GeoPoint { lat: 37.8714, lon: -122.2733 }; // near MLK & University
const DEST:  GeoPoint = GeoPoint { lat: 37.8689, lon: -122.2592 }; // near Telegraph & Bancroft
const STOPS: [GeoPoint; 2] = [
    GeoPoint { lat: 37.8704, lon: -122.2661 }, // Oxford & Center
    GeoPoint { lat: 37.8702, lon: -122.2682 }, // Shattuck & Center
];

const QUERIES: [&str; 4] = ["top", "Cheese", "s", "sather gate"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => load_config(Path::new(path))?,
        None => MapConfig::default(),
    };
    let wall = Instant::now();

    // ── Map ───────────────────────────────────────────────────────────────
    let map = load_map(args.get(1).map(Path::new))?;
    info!(
        vertices = map.graph.vertex_count(),
        edges = map.graph.edge_count(),
        places = map.places.len(),
        "map ready"
    );

    // ── Itinerary ─────────────────────────────────────────────────────────
    let mut session = ItinerarySession::new();
    let direct = session.plan(&map.graph, START, DEST)?;
    println!("direct route:    {:?}", raw_ids(&direct.vertices));
    println!("  length (deg):  {:.6}", direct.weight);

    let mut itinerary = direct;
    for stop in STOPS {
        itinerary = session.add_stop(&map.graph, stop)?;
    }
    println!("with {} stops:   {:?}", session.stops().len(), raw_ids(&itinerary.vertices));
    println!("  length (deg):  {:.6}", itinerary.weight);
    if path_weight(&map.graph, &itinerary.vertices).is_none() {
        println!("  (a leg has no path)");
    }

    // ── Tiles ─────────────────────────────────────────────────────────────
    let tree = TileQuadtree::new(&config).context("building tile quadtree")?;
    let request = RasterRequest::from_rect(route_box(&map, &itinerary.vertices), VIEWPORT_WIDTH_PX);
    let response = tree.search(&request);
    println!("raster request:  {}", serde_json::to_string(&request)?);
    println!("raster response: {}", serde_json::to_string_pretty(&response)?);
    if let Some(grid) = &response.grid {
        for row in grid.image_paths(tree.naming()) {
            println!("  {}", row.join(" "));
        }
    }

    // ── Name search ───────────────────────────────────────────────────────
    for query in QUERIES {
        let mut names: Vec<&str> = map.search(query).iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        println!("search {query:?}: {names:?}");
    }

    session.clear();
    info!(elapsed_ms = wall.elapsed().as_millis() as u64, "done");
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<MapConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: MapConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

#[cfg(feature = "osm")]
fn load_map(extract: Option<&Path>) -> Result<MapData> {
    match extract {
        Some(path) => atlas_graph::osm::load_from_pbf(path)
            .with_context(|| format!("loading OSM extract {}", path.display())),
        None => Ok(network::build_map()?),
    }
}

#[cfg(not(feature = "osm"))]
fn load_map(extract: Option<&Path>) -> Result<MapData> {
    if extract.is_some() {
        anyhow::bail!("OSM extracts need the `osm` feature: cargo run --features osm");
    }
    Ok(network::build_map()?)
}

fn raw_ids(path: &[atlas_core::VertexId]) -> Vec<i64> {
    path.iter().map(|id| id.raw()).collect()
}

/// Bounding box of every vertex on `path`, padded by [`ROUTE_MARGIN_DEG`].
fn route_box(map: &MapData, path: &[atlas_core::VertexId]) -> Rect {
    let points: Vec<GeoPoint> = path
        .iter()
        .filter_map(|&id| map.graph.get_vertex(id))
        .map(|v| v.point)
        .collect();
    let (mut n, mut w, mut s, mut e) = (f64::MIN, f64::MAX, f64::MAX, f64::MIN);
    for p in &points {
        n = n.max(p.lat);
        s = s.min(p.lat);
        w = w.min(p.lon);
        e = e.max(p.lon);
    }
    if points.is_empty() {
        let c = START;
        (n, w, s, e) = (c.lat, c.lon, c.lat, c.lon);
    }
    Rect::new(n + ROUTE_MARGIN_DEG, w - ROUTE_MARGIN_DEG, s - ROUTE_MARGIN_DEG, e + ROUTE_MARGIN_DEG)
}
