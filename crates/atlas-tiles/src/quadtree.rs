//! Fixed-depth tile quadtree.
//!
//! # Structure
//!
//! The tree is built eagerly: every node down to `max_depth` exists, and
//! every internal node has exactly four children covering its NW, NE, SW
//! and SE quadrants.  With the default depth of 7 that is 21 845 nodes.
//!
//! # Resolution
//!
//! A tile's resolution is its *lonDPP*, longitude degrees per pixel of its
//! image (`width / tile_size_px`).  A query asks for a box at some pixel
//! width, which fixes a target lonDPP.  The search returns the shallowest
//! tiles at least as fine as the target, or the deepest tiles if none is.
//! Every tile at one depth has the same lonDPP, so a result never mixes
//! depths.

use std::cmp::Ordering;

use tracing::debug;

use atlas_core::{MapConfig, Rect};

use crate::raster::{RasterGrid, RasterRequest, RasterResponse};
use crate::tile::{TileId, TileNaming};
use crate::TileResult;

// ── QuadNode ──────────────────────────────────────────────────────────────────

/// One tile of the quadtree.
#[derive(Debug, Clone)]
pub struct QuadNode {
    id: TileId,
    bounds: Rect,
    depth: u8,
    /// `[NW, NE, SW, SE]`; `None` exactly at the maximum depth.
    children: Option<Box<[QuadNode; 4]>>,
}

impl QuadNode {
    fn build(id: TileId, bounds: Rect, depth: u8, max_depth: u8) -> Self {
        let children = (depth < max_depth).then(|| {
            let [nw, ne, sw, se] = bounds.quadrants();
            let child = |q: usize, r: Rect| QuadNode::build(id.child(q), r, depth + 1, max_depth);
            Box::new([child(0, nw), child(1, ne), child(2, sw), child(3, se)])
        });
        Self { id, bounds, depth, children }
    }

    pub fn id(&self) -> &TileId {
        &self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> Option<&[QuadNode; 4]> {
        self.children.as_deref()
    }

    pub fn lon_dpp(&self, tile_size_px: f64) -> f64 {
        self.bounds.width() / tile_size_px
    }

    fn count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map_or(0, |cs| cs.iter().map(QuadNode::count).sum())
    }
}

// ── TileQuadtree ──────────────────────────────────────────────────────────────

/// Immutable tile hierarchy over the map's root rectangle.
///
/// Shared freely between threads once built; [`search`](Self::search) takes
/// `&self` and allocates only its result.
#[derive(Debug, Clone)]
pub struct TileQuadtree {
    root: QuadNode,
    tile_size_px: f64,
    naming: TileNaming,
}

impl TileQuadtree {
    /// Build the full tree described by `config`.
    ///
    /// # Errors
    ///
    /// [`TileError::Config`](crate::TileError::Config) if `config` fails
    /// [`MapConfig::validate`].
    pub fn new(config: &MapConfig) -> TileResult<Self> {
        config.validate()?;
        let root = QuadNode::build(TileId::root(), config.root, 0, config.max_depth);
        debug!(
            max_depth = config.max_depth,
            root = %config.root,
            "built tile quadtree"
        );
        Ok(Self {
            root,
            tile_size_px: config.tile_size_px,
            naming: TileNaming::from_config(config),
        })
    }

    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    pub fn tile_size_px(&self) -> f64 {
        self.tile_size_px
    }

    pub fn naming(&self) -> &TileNaming {
        &self.naming
    }

    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Node for `id`, or `None` if the path runs below the leaves.
    pub fn tile(&self, id: &TileId) -> Option<&QuadNode> {
        let mut node = &self.root;
        for q in id.quadrants() {
            node = node.children.as_deref()?.get(q)?;
        }
        Some(node)
    }

    /// Tiles covering the request's box at (at least) its resolution.
    ///
    /// Fails (`query_success: false`) when the request is malformed (see
    /// [`RasterRequest::is_valid`]) or the box misses the map entirely.
    pub fn search(&self, request: &RasterRequest) -> RasterResponse {
        if !request.is_valid() {
            debug!(?request, "rejected malformed raster request");
            return RasterResponse::failure();
        }

        let query = request.query_rect();
        let target = request.target_lon_dpp();
        let mut hits: Vec<&QuadNode> = Vec::new();
        self.collect(&self.root, &query, target, &mut hits);

        let Some(grid) = assemble(hits) else {
            debug!(%query, "raster request outside the map");
            return RasterResponse::failure();
        };
        debug!(
            %query,
            depth = grid.depth,
            rows = grid.rows(),
            cols = grid.cols(),
            "raster request served"
        );
        RasterResponse::success(grid)
    }

    fn collect<'a>(&self, node: &'a QuadNode, query: &Rect, target: f64, out: &mut Vec<&'a QuadNode>) {
        if !node.bounds.intersects(query) {
            return;
        }
        match node.children.as_deref() {
            Some(children) if node.lon_dpp(self.tile_size_px) > target => {
                for child in children {
                    self.collect(child, query, target, out);
                }
            }
            _ => out.push(node),
        }
    }
}

/// Arrange same-depth tiles into rows, north to south, each west to east.
fn assemble(mut tiles: Vec<&QuadNode>) -> Option<RasterGrid> {
    tiles.sort_by(|a, b| {
        b.bounds
            .ul
            .lat
            .total_cmp(&a.bounds.ul.lat)
            .then_with(|| a.id.cmp(&b.id))
    });

    let first = *tiles.first()?;
    let last = *tiles.last()?;

    let mut render_grid: Vec<Vec<TileId>> = Vec::new();
    let mut row_lat = f64::NAN;
    for tile in &tiles {
        if tile.bounds.ul.lat.total_cmp(&row_lat) != Ordering::Equal {
            row_lat = tile.bounds.ul.lat;
            render_grid.push(Vec::new());
        }
        if let Some(row) = render_grid.last_mut() {
            row.push(tile.id.clone());
        }
    }

    Some(RasterGrid {
        render_grid,
        raster_ul_lat: first.bounds.ul.lat,
        raster_ul_lon: first.bounds.ul.lon,
        raster_lr_lat: last.bounds.lr.lat,
        raster_lr_lon: last.bounds.lr.lon,
        depth: first.depth,
    })
}
