//! Error types for Explore.

use thiserror::Error;

use crate::coords::{AbsoluteCoord, LocalCoord};
use crate::ids::ChunkId;

/// Top-level error type for Explore operations.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// World/chunk errors
    #[error("World error: {0}")]
    World(#[from] WorldError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected world parameters. Fatal to world construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Chunk width or height is zero
    #[error("Chunk dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Upper bound for patch radii is zero
    #[error("Maximum patch radius must be at least 1, got {0}")]
    InvalidPatchRadius(u32),

    /// Tree roll denominator is zero
    #[error("Tree chance must be at least 1, got {0}")]
    InvalidTreeChance(u32),

    /// Tree canopy radius is zero
    #[error("Tree radius must be at least 1, got {0}")]
    InvalidTreeRadius(u32),

    /// Config text could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// World and chunk errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// A normalized coordinate still fell outside its chunk.
    ///
    /// This is an internal invariant failure in coordinate normalization, never
    /// a consequence of caller input.
    #[error("Local coordinate {local} is outside chunk {chunk} of size {width}x{height}")]
    OutOfChunk {
        /// Chunk the lookup resolved to
        chunk: ChunkId,
        /// Offending local coordinate
        local: LocalCoord,
        /// Chunk width
        width: u32,
        /// Chunk height
        height: u32,
    },

    /// Every tile searched for a spawn point was impassable
    #[error("No passable tile within {searched} tiles above {start}")]
    NoPassableTile {
        /// Requested spawn position
        start: AbsoluteCoord,
        /// Tiles examined
        searched: u32,
    },
}

/// Result type alias for Explore operations.
pub type ExploreResult<T> = Result<T, ExploreError>;

/// Result type alias for world lookups.
pub type WorldResult<T> = Result<T, WorldError>;
