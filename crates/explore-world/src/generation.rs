//! Procedural chunk generation.
//!
//! A chunk starts as bare ground. Randomly placed, randomly sized patches of
//! ground cover are stamped first; some patch centres are picked as tree
//! candidates, and those are then planted in order, skipping any candidate
//! whose surroundings already contain part of a tree.

use explore_common::{ChunkDims, ChunkId, ConfigError, LocalCoord};
use tracing::debug;

use crate::chunk::Chunk;
use crate::tile::TileType;

/// Default upper bound for a ground-cover patch radius.
pub const MAX_PATCH_RADIUS: u32 = 15;

/// One patch in `TREE_CHANCE` becomes a tree candidate.
pub const TREE_CHANCE: u32 = 3;

/// Default canopy radius of a tree.
pub const TREE_RADIUS: u32 = 4;

/// Default patch density: one patch per this many tiles.
pub const PATCH_DENSITY: u64 = 200;

/// Source of uniformly distributed integers for generation.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: u64) -> u64;
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, bound: u64) -> u64 {
        self.u64(..bound)
    }
}

/// Chunk generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Ground-cover patches stamped per chunk
    pub patch_count: u64,
    /// Largest patch radius (radii are drawn from `1..=max_patch_radius`)
    pub max_patch_radius: u32,
    /// Denominator of the per-patch tree probability
    pub tree_chance: u32,
    /// Canopy radius; trunks use half of it
    pub tree_radius: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            patch_count: 0,
            max_patch_radius: MAX_PATCH_RADIUS,
            tree_chance: TREE_CHANCE,
            tree_radius: TREE_RADIUS,
        }
    }
}

impl GeneratorConfig {
    /// Checks that every radius and probability bound is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_patch_radius == 0 {
            return Err(ConfigError::InvalidPatchRadius(self.max_patch_radius));
        }
        if self.tree_chance == 0 {
            return Err(ConfigError::InvalidTreeChance(self.tree_chance));
        }
        if self.tree_radius == 0 {
            return Err(ConfigError::InvalidTreeRadius(self.tree_radius));
        }
        Ok(())
    }

    /// Trunk radius derived from the canopy radius.
    #[must_use]
    pub const fn trunk_radius(&self) -> u32 {
        self.tree_radius / 2
    }
}

/// Summary of what a single generation pass placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Patches stamped
    pub patches: u64,
    /// Patch centres that rolled a tree
    pub tree_candidates: usize,
    /// Centres of trees actually planted, in planting order
    pub trees: Vec<LocalCoord>,
    /// Candidates dropped because they would touch an existing tree
    pub rejected: usize,
}

/// Procedural chunk generator.
#[derive(Debug, Clone)]
pub struct ChunkGenerator {
    /// Configuration
    config: GeneratorConfig,
}

impl ChunkGenerator {
    /// Creates a new generator with the given config.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Sets the number of patches stamped per chunk.
    pub fn set_patch_count(&mut self, patch_count: u64) {
        self.config.patch_count = patch_count;
    }

    /// Generates a chunk. `id` only labels the result; the content depends on
    /// `dims`, the configuration and the values drawn from `rng`.
    pub fn generate(&self, id: ChunkId, dims: ChunkDims, rng: &mut impl RandomSource) -> Chunk {
        self.generate_with_report(id, dims, rng).0
    }

    /// Generates a chunk and reports what was placed.
    pub fn generate_with_report(
        &self,
        id: ChunkId,
        dims: ChunkDims,
        rng: &mut impl RandomSource,
    ) -> (Chunk, GenerationReport) {
        let mut chunk = Chunk::new(id, dims);
        let mut report = GenerationReport::default();
        let mut candidates = Vec::new();
        let area = dims.area() as u64;

        for _ in 0..self.config.patch_count {
            let center = dims.local_of(rng.below(area) as usize);
            let radius = rng.below(u64::from(self.config.max_patch_radius)) as u32 + 1;
            chunk.stamp(center, radius, TileType::Cover);
            report.patches += 1;

            if rng.below(u64::from(self.config.tree_chance)) == 0 {
                candidates.push(center);
            }
        }
        report.tree_candidates = candidates.len();

        for center in candidates {
            if self.plant_tree(&mut chunk, center) {
                report.trees.push(center);
            } else {
                report.rejected += 1;
            }
        }

        debug!(
            "Generated chunk {id}: {} patches, {} trees, {} rejected",
            report.patches,
            report.trees.len(),
            report.rejected
        );

        (chunk, report)
    }

    /// Plants a tree unless another tree lies within one tile of its canopy.
    fn plant_tree(&self, chunk: &mut Chunk, center: LocalCoord) -> bool {
        let radius = self.config.tree_radius;
        if chunk.any_in_square(center, radius.saturating_add(1), |t| t.kind.is_tree()) {
            return false;
        }
        chunk.stamp(center, radius, TileType::TreeCanopy);
        chunk.stamp(center, self.config.trunk_radius(), TileType::TreeTrunk);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Square;
    use explore_common::flatten;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of draws.
    struct Scripted(VecDeque<u64>);

    impl Scripted {
        fn new(values: &[u64]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, bound: u64) -> u64 {
            self.0.pop_front().expect("script exhausted") % bound
        }
    }

    fn dims(width: u32, height: u32) -> ChunkDims {
        ChunkDims::new(width, height).expect("valid dims")
    }

    fn generator(patch_count: u64) -> ChunkGenerator {
        ChunkGenerator::new(GeneratorConfig {
            patch_count,
            ..GeneratorConfig::default()
        })
        .expect("valid config")
    }

    fn kind_at(chunk: &Chunk, x: i64, y: i64) -> Option<TileType> {
        chunk.get(LocalCoord::new(x, y)).map(|t| t.kind)
    }

    #[test]
    fn test_zero_patches_is_bare() {
        let mut rng = fastrand::Rng::with_seed(7);
        let chunk = generator(0).generate(ChunkId::ORIGIN, dims(10, 10), &mut rng);
        assert_eq!(chunk.count(TileType::Bare), 100);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad_radius = GeneratorConfig {
            max_patch_radius: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            ChunkGenerator::new(bad_radius).err(),
            Some(ConfigError::InvalidPatchRadius(0))
        );

        let bad_chance = GeneratorConfig {
            tree_chance: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            ChunkGenerator::new(bad_chance).err(),
            Some(ConfigError::InvalidTreeChance(0))
        );
    }

    #[test]
    fn test_patch_without_tree() {
        let d = dims(20, 20);
        // centre (5, 5), radius 2, tree roll 1 (no tree)
        let mut rng = Scripted::new(&[flatten(5, 5, 20) as u64, 1, 1]);
        let (chunk, report) = generator(1).generate_with_report(ChunkId::ORIGIN, d, &mut rng);

        assert_eq!(report.patches, 1);
        assert_eq!(report.tree_candidates, 0);
        assert_eq!(chunk.count(TileType::Cover), 16);
        assert_eq!(kind_at(&chunk, 3, 3), Some(TileType::Cover));
        assert_eq!(kind_at(&chunk, 7, 7), Some(TileType::Bare));
    }

    #[test]
    fn test_tree_trunk_overwrites_canopy() {
        let d = dims(20, 20);
        let mut rng = Scripted::new(&[flatten(10, 10, 20) as u64, 0, 0]);
        let (chunk, report) = generator(1).generate_with_report(ChunkId::ORIGIN, d, &mut rng);

        assert_eq!(report.trees, vec![LocalCoord::new(10, 10)]);
        // canopy [6, 14), trunk [8, 12)
        assert_eq!(chunk.count(TileType::TreeTrunk), 16);
        assert_eq!(chunk.count(TileType::TreeCanopy), 64 - 16);
        assert_eq!(kind_at(&chunk, 10, 10), Some(TileType::TreeTrunk));
        assert_eq!(kind_at(&chunk, 6, 6), Some(TileType::TreeCanopy));
        assert_eq!(kind_at(&chunk, 14, 10), Some(TileType::Bare));
    }

    #[test]
    fn test_overlapping_candidate_is_dropped() {
        let d = dims(20, 20);
        let mut rng = Scripted::new(&[
            flatten(5, 5, 20) as u64,
            0,
            0,
            flatten(8, 5, 20) as u64,
            0,
            0,
        ]);
        let (chunk, report) = generator(2).generate_with_report(ChunkId::ORIGIN, d, &mut rng);

        assert_eq!(report.tree_candidates, 2);
        assert_eq!(report.trees, vec![LocalCoord::new(5, 5)]);
        assert_eq!(report.rejected, 1);
        assert_eq!(kind_at(&chunk, 8, 5), Some(TileType::TreeCanopy));
        assert_eq!(chunk.count(TileType::TreeTrunk), 16);
    }

    #[test]
    fn test_trees_one_tile_apart_both_planted() {
        let d = dims(20, 10);
        // canopies [0, 8) and [9, 17) leave column 8 clear
        let mut rng = Scripted::new(&[
            flatten(4, 4, 20) as u64,
            0,
            0,
            flatten(13, 4, 20) as u64,
            0,
            0,
        ]);
        let (chunk, report) = generator(2).generate_with_report(ChunkId::ORIGIN, d, &mut rng);

        assert_eq!(report.trees.len(), 2);
        assert_eq!(kind_at(&chunk, 8, 4), Some(TileType::Bare));
        assert_eq!(kind_at(&chunk, 9, 4), Some(TileType::TreeCanopy));
    }

    #[test]
    fn test_tree_at_corner_is_clipped() {
        let d = dims(10, 10);
        let mut rng = Scripted::new(&[0, 0, 0]);
        let (chunk, report) = generator(1).generate_with_report(ChunkId::ORIGIN, d, &mut rng);

        assert_eq!(report.trees, vec![LocalCoord::new(0, 0)]);
        // canopy [0, 4), trunk [0, 2)
        assert_eq!(chunk.count(TileType::TreeTrunk), 4);
        assert_eq!(chunk.count(TileType::TreeCanopy), 12);
    }

    #[test]
    fn test_max_tree_radius_covers_chunk() {
        let generator = ChunkGenerator::new(GeneratorConfig {
            patch_count: 2,
            tree_chance: 1,
            tree_radius: u32::MAX,
            ..GeneratorConfig::default()
        })
        .expect("valid config");
        let d = dims(8, 8);
        let mut rng = Scripted::new(&[0, 0, 0, flatten(7, 7, 8) as u64, 0, 0]);
        let (chunk, report) = generator.generate_with_report(ChunkId::ORIGIN, d, &mut rng);

        assert_eq!(report.trees, vec![LocalCoord::new(0, 0)]);
        assert_eq!(report.rejected, 1);
        assert_eq!(chunk.count(TileType::TreeTrunk), 64);
    }

    #[test]
    fn test_same_seed_same_chunk_regardless_of_id() {
        let generator = generator(30);
        let d = dims(64, 48);

        let mut rng_a = fastrand::Rng::with_seed(42);
        let mut rng_b = fastrand::Rng::with_seed(42);
        let a = generator.generate(ChunkId::new(0, 0), d, &mut rng_a);
        let b = generator.generate(ChunkId::new(-9, 3), d, &mut rng_b);

        assert_eq!(a.tiles(), b.tiles());
        assert_eq!(b.id(), ChunkId::new(-9, 3));
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator = generator(30);
        let d = dims(64, 64);

        let a = generator.generate(ChunkId::ORIGIN, d, &mut fastrand::Rng::with_seed(1));
        let b = generator.generate(ChunkId::ORIGIN, d, &mut fastrand::Rng::with_seed(2));

        assert_ne!(a.tiles(), b.tiles());
    }

    proptest! {
        #[test]
        fn prop_trees_never_touch(
            seed in any::<u64>(),
            patch_count in 0u64..200,
            w in 1u32..80,
            h in 1u32..80,
        ) {
            let generator = generator(patch_count);
            let d = dims(w, h);
            let mut rng = fastrand::Rng::with_seed(seed);
            let (chunk, report) = generator.generate_with_report(ChunkId::ORIGIN, d, &mut rng);
            let radius = generator.config().tree_radius;

            prop_assert_eq!(chunk.tiles().len(), d.area());
            prop_assert_eq!(report.trees.len() + report.rejected, report.tree_candidates);

            for (i, earlier) in report.trees.iter().enumerate() {
                prop_assert_eq!(
                    chunk.get(*earlier).map(|t| t.kind),
                    Some(TileType::TreeTrunk)
                );
                let canopy: Vec<_> = Square::clipped(*earlier, radius, d).coords().collect();
                for later in &report.trees[i + 1..] {
                    let scan = Square::clipped(*later, radius + 1, d);
                    prop_assert!(scan.coords().all(|c| !canopy.contains(&c)));
                }
            }
        }
    }
}
