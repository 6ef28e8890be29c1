//! Headless simulation session.
//!
//! Drives one agent through the world tick by tick: pick a direction, try to
//! move, mark the tile underfoot, and periodically regenerate the world.

use explore_common::{AbsoluteCoord, ExploreResult};
use explore_world::World;
use tracing::{debug, info};

use crate::agent::{Direction, Explorer};
use crate::config::EngineConfig;

/// Counters collected over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Ticks simulated
    pub ticks: u64,
    /// Steps that moved the agent
    pub moves: u64,
    /// Steps refused by an impassable tile
    pub blocked: u64,
    /// Tiles visited for the first time
    pub tiles_visited: u64,
    /// World regenerations
    pub regenerations: u64,
}

/// A running simulation.
#[derive(Debug)]
pub struct Session {
    /// Engine configuration
    config: EngineConfig,
    /// The world being explored
    world: World,
    /// The agent
    explorer: Explorer,
    /// Direction source for the agent
    rng: fastrand::Rng,
    /// Collected counters
    stats: SessionStats,
}

impl Session {
    /// Creates the world and spawns the agent on a visited tile.
    pub fn new(config: EngineConfig) -> ExploreResult<Self> {
        let mut world = World::new(config.world.clone())?;
        let explorer = Explorer::spawn(&mut world, Self::spawn_point(&config))?;
        let rng = config
            .walk_seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);

        let mut session = Self {
            config,
            world,
            explorer,
            rng,
            stats: SessionStats::default(),
        };
        session.mark_current()?;
        Ok(session)
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the agent.
    #[must_use]
    pub const fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// Returns the counters collected so far.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> ExploreResult<()> {
        let direction = Direction::ALL[self.rng.usize(..Direction::ALL.len())];
        if self.explorer.step(&mut self.world, direction)? {
            self.stats.moves += 1;
        } else {
            self.stats.blocked += 1;
        }
        self.mark_current()?;

        self.stats.ticks += 1;

        let every = self.config.regenerate_every;
        if every > 0 && self.stats.ticks % every == 0 {
            self.regenerate()?;
        }
        Ok(())
    }

    /// Runs the configured number of ticks.
    pub fn run(&mut self) -> ExploreResult<SessionStats> {
        for _ in 0..self.config.ticks {
            self.tick()?;
        }

        let position = self.explorer.absolute(&self.world);
        info!(
            "Session finished after {} ticks: {} moves, {} blocked, {} tiles visited, \
             {} chunks generated, agent at {position}",
            self.stats.ticks,
            self.stats.moves,
            self.stats.blocked,
            self.stats.tiles_visited,
            self.world.generated_count()
        );
        Ok(self.stats)
    }

    /// Discards the world's chunks and re-spawns the agent where it stood.
    fn regenerate(&mut self) -> ExploreResult<()> {
        let position = self.explorer.absolute(&self.world);
        self.world.reset(self.config.regenerate_patch_count);
        self.explorer = Explorer::spawn(&mut self.world, position)?;
        self.mark_current()?;
        self.stats.regenerations += 1;
        debug!("Regenerated world at tick {}", self.stats.ticks);
        Ok(())
    }

    fn mark_current(&mut self) -> ExploreResult<()> {
        if self.explorer.mark_current(&mut self.world)? {
            self.stats.tiles_visited += 1;
        }
        Ok(())
    }

    fn spawn_point(config: &EngineConfig) -> AbsoluteCoord {
        AbsoluteCoord::new(config.spawn_x, config.spawn_y)
    }
}
