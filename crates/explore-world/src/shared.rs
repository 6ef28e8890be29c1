//! Thread-safe world handle.

use explore_common::{AbsoluteCoord, ChunkId, LocalCoord, WorldResult};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::tile::Tile;
use crate::world::World;

/// A cloneable handle to one [`World`] shared between threads.
///
/// Each call holds the lock for the whole lookup, so two threads asking for
/// the same missing chunk can never both generate it. Chunks inserted through
/// one clone are visible through every other clone.
#[derive(Debug, Clone)]
pub struct SharedWorld {
    inner: Arc<Mutex<World>>,
}

impl SharedWorld {
    /// Wraps a world for shared access.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            inner: Arc::new(Mutex::new(world)),
        }
    }

    /// Runs `f` with exclusive access to the world.
    pub fn with<R>(&self, f: impl FnOnce(&mut World) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`World::tile_at`].
    pub fn tile_at(&self, chunk: ChunkId, local: LocalCoord) -> WorldResult<Tile> {
        self.inner.lock().tile_at(chunk, local)
    }

    /// See [`World::tile_at_absolute`].
    pub fn tile_at_absolute(&self, absolute: AbsoluteCoord) -> WorldResult<Tile> {
        self.inner.lock().tile_at_absolute(absolute)
    }

    /// See [`World::mark_visited`].
    pub fn mark_visited(&self, chunk: ChunkId, local: LocalCoord) -> WorldResult<bool> {
        self.inner.lock().mark_visited(chunk, local)
    }

    /// See [`World::mark_visited_absolute`].
    pub fn mark_visited_absolute(&self, absolute: AbsoluteCoord) -> WorldResult<bool> {
        self.inner.lock().mark_visited_absolute(absolute)
    }

    /// See [`World::reset`].
    pub fn reset(&self, patch_count: Option<u64>) {
        self.inner.lock().reset(patch_count);
    }

    /// See [`World::chunk_count`].
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.inner.lock().chunk_count()
    }

    /// See [`World::generated_count`].
    #[must_use]
    pub fn generated_count(&self) -> u64 {
        self.inner.lock().generated_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use std::thread;

    fn shared(patch_count: u64) -> SharedWorld {
        SharedWorld::new(
            World::new(WorldConfig::new(32, 32, patch_count).with_seed(21)).expect("valid config"),
        )
    }

    #[test]
    fn test_concurrent_lookups_generate_once() {
        let world = shared(40);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let world = world.clone();
                thread::spawn(move || {
                    world
                        .tile_at(ChunkId::new(5, 5), LocalCoord::new(i, i))
                        .expect("lookup failed")
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }

        assert_eq!(world.generated_count(), 1);
        assert_eq!(world.chunk_count(), 1);
    }

    #[test]
    fn test_insert_visible_through_clones() {
        let a = shared(0);
        let b = a.clone();

        a.mark_visited_absolute(AbsoluteCoord::new(-40, 3))
            .expect("mark failed");
        let tile = b
            .tile_at_absolute(AbsoluteCoord::new(-40, 3))
            .expect("lookup failed");

        assert!(tile.visited);
        assert_eq!(b.chunk_count(), 1);

        b.reset(None);
        assert_eq!(a.chunk_count(), 0);
        assert!(a.with(|w| !w.contains_chunk(ChunkId::new(-2, 0))));
    }
}
