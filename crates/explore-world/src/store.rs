//! Chunk storage and lazy generation.

use ahash::AHashMap;
use explore_common::{
    normalize_to_chunk, ChunkDims, ChunkId, ChunkPosition, LocalCoord, WorldError, WorldResult,
};
use std::collections::hash_map::Entry;
use tracing::error;

use crate::chunk::Chunk;
use crate::generation::ChunkGenerator;
use crate::tile::Tile;

/// Owns every generated chunk, keyed by chunk id.
///
/// A chunk is generated the first time its id is addressed and kept until
/// [`ChunkStore::clear`]; later lookups of the same id always see the same
/// tiles.
pub struct ChunkStore {
    /// Generated chunks
    chunks: AHashMap<ChunkId, Chunk>,
    /// Dimensions shared by every chunk
    dims: ChunkDims,
    /// Chunk generator
    generator: ChunkGenerator,
    /// Random source fed to the generator
    rng: fastrand::Rng,
    /// Chunks generated over the store's lifetime
    generated: u64,
}

impl ChunkStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(dims: ChunkDims, generator: ChunkGenerator, rng: fastrand::Rng) -> Self {
        Self {
            chunks: AHashMap::new(),
            dims,
            generator,
            rng,
            generated: 0,
        }
    }

    /// Returns the chunk dimensions.
    #[must_use]
    pub const fn dims(&self) -> ChunkDims {
        self.dims
    }

    /// Returns the chunk generator.
    #[must_use]
    pub const fn generator(&self) -> &ChunkGenerator {
        &self.generator
    }

    /// Returns the chunk generator mutably.
    pub fn generator_mut(&mut self) -> &mut ChunkGenerator {
        &mut self.generator
    }

    /// Returns the chunk for `id`, generating and inserting it on first access.
    pub fn get_or_create_chunk(&mut self, id: ChunkId) -> &mut Chunk {
        match self.chunks.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let chunk = self.generator.generate(id, self.dims, &mut self.rng);
                self.generated += 1;
                entry.insert(chunk)
            },
        }
    }

    /// Returns a chunk if it has already been generated.
    #[must_use]
    pub fn chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(&id)
    }

    /// Checks if a chunk has been generated.
    #[must_use]
    pub fn contains(&self, id: ChunkId) -> bool {
        self.chunks.contains_key(&id)
    }

    /// Returns the number of chunks currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if no chunk has been generated since creation or the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns how many chunks have been generated, including discarded ones.
    #[must_use]
    pub const fn generated_count(&self) -> u64 {
        self.generated
    }

    /// Resolves a possibly out-of-range coordinate relative to `chunk`.
    #[must_use]
    pub fn normalize(&self, chunk: ChunkId, local: LocalCoord) -> ChunkPosition {
        normalize_to_chunk(chunk, local, self.dims)
    }

    /// Looks up a tile, crossing chunk boundaries as needed.
    pub fn tile(&mut self, chunk: ChunkId, local: LocalCoord) -> WorldResult<&Tile> {
        let pos = self.normalize(chunk, local);
        let dims = self.dims;
        self.get_or_create_chunk(pos.chunk)
            .get(pos.local)
            .ok_or_else(|| out_of_chunk(pos, dims))
    }

    /// Looks up a tile mutably, crossing chunk boundaries as needed.
    pub fn tile_mut(&mut self, chunk: ChunkId, local: LocalCoord) -> WorldResult<&mut Tile> {
        let pos = self.normalize(chunk, local);
        let dims = self.dims;
        self.get_or_create_chunk(pos.chunk)
            .get_mut(pos.local)
            .ok_or_else(|| out_of_chunk(pos, dims))
    }

    /// Sets a tile's visited flag. Returns true if it was not already set.
    pub fn mark_visited(&mut self, chunk: ChunkId, local: LocalCoord) -> WorldResult<bool> {
        Ok(self.tile_mut(chunk, local)?.visit())
    }

    /// Discards every chunk. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.chunks.len();
        self.chunks.clear();
        dropped
    }
}

impl std::fmt::Debug for ChunkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkStore")
            .field("dims", &self.dims)
            .field("loaded_chunks", &self.chunks.len())
            .field("generated", &self.generated)
            .finish_non_exhaustive()
    }
}

fn out_of_chunk(pos: ChunkPosition, dims: ChunkDims) -> WorldError {
    error!(
        "Normalized coordinate {} escaped chunk {} ({}x{})",
        pos.local,
        pos.chunk,
        dims.width(),
        dims.height()
    );
    WorldError::OutOfChunk {
        chunk: pos.chunk,
        local: pos.local,
        width: dims.width(),
        height: dims.height(),
    }
}
