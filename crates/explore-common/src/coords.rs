//! Coordinate types and conversions between the three coordinate spaces.
//!
//! - **Absolute**: unbounded world-space tile position.
//! - **Chunk id**: position of a chunk in the chunk grid ([`ChunkId`]).
//! - **Local**: position within one chunk, in `[0, width) x [0, height)`.
//!
//! All conversions use floor (Euclidean) division so that they agree in every
//! quadrant: absolute `-1` lives in chunk `-1` at local `width - 1`, never in
//! chunk `0`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;
use crate::ids::ChunkId;

/// Tile position in the unbounded world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsoluteCoord {
    /// X coordinate in world space
    pub x: i64,
    /// Y coordinate in world space
    pub y: i64,
}

impl AbsoluteCoord {
    /// Creates a new absolute coordinate.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Converts to the owning chunk and the local coordinate inside it.
    #[must_use]
    pub fn to_chunk(self, dims: ChunkDims) -> ChunkPosition {
        absolute_to_chunk(self, dims)
    }
}

impl fmt::Display for AbsoluteCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coordinate relative to a chunk.
///
/// Signed so that a neighbour one step outside the chunk (`x = -1`,
/// `x = width`) can be expressed before it is normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalCoord {
    /// X coordinate relative to the chunk's left edge
    pub x: i64,
    /// Y coordinate relative to the chunk's top edge
    pub y: i64,
}

impl LocalCoord {
    /// Creates a new local coordinate.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for LocalCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height shared by every chunk of a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkDims {
    width: u32,
    height: u32,
}

impl ChunkDims {
    /// Creates chunk dimensions, rejecting zero-sized axes.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Chunk width in tiles.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Chunk height in tiles.
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Number of tiles in one chunk.
    #[must_use]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true when `local` lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub const fn contains(self, local: LocalCoord) -> bool {
        local.x >= 0
            && local.y >= 0
            && local.x < self.width as i64
            && local.y < self.height as i64
    }

    /// Row-major index of an in-range local coordinate.
    #[must_use]
    pub fn index_of(self, local: LocalCoord) -> Option<usize> {
        if !self.contains(local) {
            return None;
        }
        Some(flatten(
            local.x as usize,
            local.y as usize,
            self.width as usize,
        ))
    }

    /// Local coordinate of a row-major index.
    #[must_use]
    pub fn local_of(self, index: usize) -> LocalCoord {
        let (x, y) = unflatten(index, self.width as usize);
        LocalCoord::new(x as i64, y as i64)
    }
}

/// A chunk id paired with a local coordinate inside that chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPosition {
    /// Owning chunk
    pub chunk: ChunkId,
    /// Position within the chunk
    pub local: LocalCoord,
}

impl ChunkPosition {
    /// Creates a new chunk position.
    #[must_use]
    pub const fn new(chunk: ChunkId, local: LocalCoord) -> Self {
        Self { chunk, local }
    }

    /// Converts to absolute world space.
    #[must_use]
    pub fn to_absolute(self, dims: ChunkDims) -> AbsoluteCoord {
        chunk_to_absolute(self.chunk, self.local, dims)
    }
}

/// Converts a 2-D coordinate to a row-major buffer index.
#[must_use]
pub const fn flatten(x: usize, y: usize, row_width: usize) -> usize {
    x + row_width * y
}

/// Inverse of [`flatten`].
#[must_use]
pub const fn unflatten(index: usize, row_width: usize) -> (usize, usize) {
    (index % row_width, index / row_width)
}

/// Rewrites a possibly out-of-range local coordinate so that it lies inside
/// its chunk, moving the chunk id by as many chunks as the coordinate spills
/// over on each axis.
#[must_use]
pub fn normalize_to_chunk(chunk: ChunkId, local: LocalCoord, dims: ChunkDims) -> ChunkPosition {
    let width = i64::from(dims.width);
    let height = i64::from(dims.height);
    ChunkPosition {
        chunk: ChunkId::new(
            chunk.x + local.x.div_euclid(width),
            chunk.y + local.y.div_euclid(height),
        ),
        local: LocalCoord::new(local.x.rem_euclid(width), local.y.rem_euclid(height)),
    }
}

/// Converts a chunk-relative coordinate to absolute world space.
#[must_use]
pub fn chunk_to_absolute(chunk: ChunkId, local: LocalCoord, dims: ChunkDims) -> AbsoluteCoord {
    AbsoluteCoord::new(
        local.x + chunk.x * i64::from(dims.width),
        local.y + chunk.y * i64::from(dims.height),
    )
}

/// Converts an absolute coordinate to its owning chunk and in-range local coordinate.
#[must_use]
pub fn absolute_to_chunk(absolute: AbsoluteCoord, dims: ChunkDims) -> ChunkPosition {
    normalize_to_chunk(
        ChunkId::ORIGIN,
        LocalCoord::new(absolute.x, absolute.y),
        dims,
    )
}
