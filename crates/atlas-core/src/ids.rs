//! Strongly typed vertex identifier.
//!
//! Vertex ids come from the map feed (OSM node ids are signed 64-bit), so
//! unlike a dense index they are sparse and never used to index a `Vec`
//! directly.  The wrapper is `Copy + Ord + Hash` so it can key both hash and
//! ordered maps.

use std::fmt;

/// Globally unique id of a map vertex, assigned by the data source.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VertexId(pub i64);

impl VertexId {
    /// The raw id as it appeared in the source feed.
    #[inline(always)]
    pub fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<i64> for VertexId {
    #[inline(always)]
    fn from(raw: i64) -> Self {
        VertexId(raw)
    }
}

impl From<VertexId> for i64 {
    #[inline(always)]
    fn from(id: VertexId) -> i64 {
        id.0
    }
}
