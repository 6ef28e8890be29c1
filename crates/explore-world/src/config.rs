//! World configuration.

use explore_common::{ChunkDims, ConfigError};
use serde::{Deserialize, Serialize};

use crate::generation::{
    GeneratorConfig, MAX_PATCH_RADIUS, PATCH_DENSITY, TREE_CHANCE, TREE_RADIUS,
};

/// Parameters fixed for the lifetime of a world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunk width in tiles
    pub chunk_width: u32,
    /// Chunk height in tiles
    pub chunk_height: u32,
    /// Patches per chunk (None = one per `PATCH_DENSITY` tiles)
    pub patch_count: Option<u64>,
    /// Largest ground-cover patch radius
    pub max_patch_radius: u32,
    /// One patch in `tree_chance` becomes a tree candidate
    pub tree_chance: u32,
    /// Tree canopy radius
    pub tree_radius: u32,
    /// Random seed (None = random)
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_width: 256,
            chunk_height: 256,
            patch_count: None,
            max_patch_radius: MAX_PATCH_RADIUS,
            tree_chance: TREE_CHANCE,
            tree_radius: TREE_RADIUS,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Creates a config with the given chunk size and patch count.
    #[must_use]
    pub fn new(chunk_width: u32, chunk_height: u32, patch_count: u64) -> Self {
        Self {
            chunk_width,
            chunk_height,
            patch_count: Some(patch_count),
            ..Self::default()
        }
    }

    /// Returns this config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validated chunk dimensions.
    pub fn dims(&self) -> Result<ChunkDims, ConfigError> {
        ChunkDims::new(self.chunk_width, self.chunk_height)
    }

    /// Patch count in effect for chunks of the configured size.
    #[must_use]
    pub fn effective_patch_count(&self) -> u64 {
        self.patch_count.unwrap_or_else(|| {
            u64::from(self.chunk_width) * u64::from(self.chunk_height) / PATCH_DENSITY
        })
    }

    /// Validated generator parameters.
    pub fn generator_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let config = GeneratorConfig {
            patch_count: self.effective_patch_count(),
            max_patch_radius: self.max_patch_radius,
            tree_chance: self.tree_chance,
            tree_radius: self.tree_radius,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dims()?;
        self.generator_config()?;
        Ok(())
    }
}
