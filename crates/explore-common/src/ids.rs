//! Identifier types for chunks in the infinite grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a chunk.
///
/// A chunk id is its position in the (unbounded) chunk grid: chunk `(1, 0)` sits
/// immediately to the right of the origin chunk, `(0, -1)` immediately above it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkId {
    /// X coordinate of the chunk
    pub x: i64,
    /// Y coordinate of the chunk
    pub y: i64,
}

impl ChunkId {
    /// The chunk containing the world origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new chunk ID.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the id of the chunk `dx` chunks across and `dy` chunks down.
    #[must_use]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
