//! World facade used by hosts (renderers, input handlers, agents).

use explore_common::{
    absolute_to_chunk, chunk_to_absolute, AbsoluteCoord, ChunkDims, ChunkId, ChunkPosition,
    ConfigError, LocalCoord, WorldResult,
};
use tracing::info;

use crate::chunk::Chunk;
use crate::config::WorldConfig;
use crate::generation::ChunkGenerator;
use crate::store::ChunkStore;
use crate::tile::Tile;

/// An infinite tile world whose chunks are generated on first access.
#[derive(Debug)]
pub struct World {
    /// Configuration the world was created with
    config: WorldConfig,
    /// Chunk storage
    store: ChunkStore,
}

impl World {
    /// Creates a world, rejecting invalid configuration.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let dims = config.dims()?;
        let generator = ChunkGenerator::new(config.generator_config()?)?;
        let rng = config
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);

        info!(
            "Creating world with chunk_size={}x{}, patch_count={}, seed={:?}",
            dims.width(),
            dims.height(),
            generator.config().patch_count,
            config.seed
        );

        Ok(Self {
            config,
            store: ChunkStore::new(dims, generator, rng),
        })
    }

    /// Returns the configuration the world was created with.
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Returns the chunk dimensions.
    #[must_use]
    pub const fn dims(&self) -> ChunkDims {
        self.store.dims()
    }

    /// Returns the patch count used for newly generated chunks.
    #[must_use]
    pub const fn patch_count(&self) -> u64 {
        self.store.generator().config().patch_count
    }

    /// Looks up a tile by agent-relative coordinate. `local` may lie outside
    /// `chunk`; the owning chunk is resolved (and generated) as needed.
    pub fn tile_at(&mut self, chunk: ChunkId, local: LocalCoord) -> WorldResult<Tile> {
        self.store.tile(chunk, local).copied()
    }

    /// Looks up a tile by absolute coordinate.
    pub fn tile_at_absolute(&mut self, absolute: AbsoluteCoord) -> WorldResult<Tile> {
        let pos = self.absolute_to_chunk(absolute);
        self.tile_at(pos.chunk, pos.local)
    }

    /// Marks a tile as visited. Marking an already visited tile is a no-op.
    ///
    /// Returns true if the tile had not been visited before.
    pub fn mark_visited(&mut self, chunk: ChunkId, local: LocalCoord) -> WorldResult<bool> {
        self.store.mark_visited(chunk, local)
    }

    /// Marks the tile at an absolute coordinate as visited.
    pub fn mark_visited_absolute(&mut self, absolute: AbsoluteCoord) -> WorldResult<bool> {
        let pos = self.absolute_to_chunk(absolute);
        self.mark_visited(pos.chunk, pos.local)
    }

    /// Discards every chunk so that later queries generate fresh terrain.
    ///
    /// `patch_count` replaces the patch count for all future chunks; `None`
    /// keeps the current one.
    pub fn reset(&mut self, patch_count: Option<u64>) {
        if let Some(count) = patch_count {
            self.store.generator_mut().set_patch_count(count);
        }
        let dropped = self.store.clear();
        info!(
            "Reset world: discarded {dropped} chunks, patch_count={}",
            self.patch_count()
        );
    }

    /// Converts an absolute coordinate to chunk space.
    #[must_use]
    pub fn absolute_to_chunk(&self, absolute: AbsoluteCoord) -> ChunkPosition {
        absolute_to_chunk(absolute, self.dims())
    }

    /// Converts a chunk-relative coordinate to absolute space.
    #[must_use]
    pub fn chunk_to_absolute(&self, chunk: ChunkId, local: LocalCoord) -> AbsoluteCoord {
        chunk_to_absolute(chunk, local, self.dims())
    }

    /// Resolves an out-of-range chunk-relative coordinate to its owning chunk.
    #[must_use]
    pub fn normalize(&self, chunk: ChunkId, local: LocalCoord) -> ChunkPosition {
        self.store.normalize(chunk, local)
    }

    /// Returns a chunk if it has already been generated.
    #[must_use]
    pub fn chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.store.chunk(id)
    }

    /// Checks if a chunk has been generated since creation or the last reset.
    #[must_use]
    pub fn contains_chunk(&self, id: ChunkId) -> bool {
        self.store.contains(id)
    }

    /// Returns the number of chunks currently held.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.store.len()
    }

    /// Returns how many chunks have been generated over the world's lifetime.
    #[must_use]
    pub const fn generated_count(&self) -> u64 {
        self.store.generated_count()
    }
}
