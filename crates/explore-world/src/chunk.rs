//! Chunk data structure.

use explore_common::{ChunkDims, ChunkId, LocalCoord};

use crate::tile::{Tile, TileType};

/// Half-open square `[x - r, x + r) x [y - r, y + r)` clipped to a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    x_start: i64,
    x_end: i64,
    y_start: i64,
    y_end: i64,
}

impl Square {
    /// Creates the square of `radius` around `center`, clipped to `dims`.
    #[must_use]
    pub fn clipped(center: LocalCoord, radius: u32, dims: ChunkDims) -> Self {
        let r = i64::from(radius);
        Self {
            x_start: (center.x - r).max(0),
            x_end: (center.x + r).min(i64::from(dims.width())),
            y_start: (center.y - r).max(0),
            y_end: (center.y + r).min(i64::from(dims.height())),
        }
    }

    /// Iterates over every coordinate in the square, row by row.
    pub fn coords(self) -> impl Iterator<Item = LocalCoord> {
        (self.y_start..self.y_end)
            .flat_map(move |y| (self.x_start..self.x_end).map(move |x| LocalCoord::new(x, y)))
    }

    /// Returns true if the clipped square covers no tiles.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.x_start >= self.x_end || self.y_start >= self.y_end
    }
}

/// A fixed-size block of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk identifier
    id: ChunkId,
    /// Chunk dimensions
    dims: ChunkDims,
    /// Tile data (width × height tiles, row-major)
    tiles: Vec<Tile>,
}

impl Chunk {
    /// Creates a chunk of bare, unvisited tiles.
    #[must_use]
    pub fn new(id: ChunkId, dims: ChunkDims) -> Self {
        Self {
            id,
            dims,
            tiles: vec![Tile::default(); dims.area()],
        }
    }

    /// Returns the chunk identifier.
    #[must_use]
    pub const fn id(&self) -> ChunkId {
        self.id
    }

    /// Returns the chunk dimensions.
    #[must_use]
    pub const fn dims(&self) -> ChunkDims {
        self.dims
    }

    /// Gets a tile at local coordinates.
    #[must_use]
    pub fn get(&self, local: LocalCoord) -> Option<&Tile> {
        self.dims.index_of(local).and_then(|i| self.tiles.get(i))
    }

    /// Gets a mutable tile at local coordinates.
    pub fn get_mut(&mut self, local: LocalCoord) -> Option<&mut Tile> {
        self.dims.index_of(local).and_then(|i| self.tiles.get_mut(i))
    }

    /// Returns a slice of all tiles.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Replaces every tile in the square of `radius` around `center` with a
    /// fresh tile of `kind`. Tiles past the chunk edge are skipped.
    pub fn stamp(&mut self, center: LocalCoord, radius: u32, kind: TileType) {
        for local in Square::clipped(center, radius, self.dims).coords() {
            if let Some(tile) = self.get_mut(local) {
                *tile = Tile::new(kind);
            }
        }
    }

    /// Returns true if any tile in the square of `radius` around `center`
    /// satisfies `pred`.
    pub fn any_in_square(
        &self,
        center: LocalCoord,
        radius: u32,
        mut pred: impl FnMut(&Tile) -> bool,
    ) -> bool {
        Square::clipped(center, radius, self.dims)
            .coords()
            .any(|local| self.get(local).is_some_and(&mut pred))
    }

    /// Counts tiles of the given type.
    #[must_use]
    pub fn count(&self, kind: TileType) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }
}
