//! The wandering agent.
//!
//! The agent reasons in chunk-relative space: it holds a normalized
//! [`ChunkPosition`] and looks one step ahead with an unnormalized local
//! coordinate, letting the world resolve which chunk the target lies in.

use explore_common::{AbsoluteCoord, ChunkPosition, WorldError, WorldResult};
use explore_world::World;
use tracing::debug;

/// Upper bound on tiles searched when pushing a spawn off a trunk.
const MAX_SPAWN_SEARCH: u32 = 10_000;

/// Unit step directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// y - 1
    Up,
    /// y + 1
    Down,
    /// x - 1
    Left,
    /// x + 1
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Offset of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// An agent walking the world one tile at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explorer {
    position: ChunkPosition,
}

impl Explorer {
    /// Places an agent at `start`, pushing it up until it stands on a
    /// passable tile.
    pub fn spawn(world: &mut World, start: AbsoluteCoord) -> WorldResult<Self> {
        let mut position = world.absolute_to_chunk(start);
        for _ in 0..MAX_SPAWN_SEARCH {
            if world.tile_at(position.chunk, position.local)?.is_passable() {
                debug!(
                    "Spawned explorer at {} (chunk {}, local {})",
                    position.to_absolute(world.dims()),
                    position.chunk,
                    position.local
                );
                return Ok(Self { position });
            }
            position = world.normalize(position.chunk, position.local.offset(0, -1));
        }
        Err(WorldError::NoPassableTile {
            start,
            searched: MAX_SPAWN_SEARCH,
        })
    }

    /// Current position in chunk space.
    #[must_use]
    pub const fn position(&self) -> ChunkPosition {
        self.position
    }

    /// Current position in absolute space.
    #[must_use]
    pub fn absolute(&self, world: &World) -> AbsoluteCoord {
        world.chunk_to_absolute(self.position.chunk, self.position.local)
    }

    /// Moves one tile in `direction` unless the target is impassable.
    /// Returns true if the agent moved.
    pub fn step(&mut self, world: &mut World, direction: Direction) -> WorldResult<bool> {
        let (dx, dy) = direction.delta();
        let target = self.position.local.offset(dx, dy);
        if !world.tile_at(self.position.chunk, target)?.is_passable() {
            return Ok(false);
        }
        self.position = world.normalize(self.position.chunk, target);
        Ok(true)
    }

    /// Marks the tile under the agent as visited. Returns true on first visit.
    pub fn mark_current(&self, world: &mut World) -> WorldResult<bool> {
        world.mark_visited(self.position.chunk, self.position.local)
    }
}
