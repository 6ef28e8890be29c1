//! Engine configuration.
//!
//! Provides the simulation, logging and world settings for a headless run.
//! Configuration can be loaded from and saved to a TOML file.

use explore_common::{ConfigError, ExploreResult};
use explore_world::WorldConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "explore.toml";

/// Engine configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Simulation Settings ===
    /// Number of ticks to simulate
    pub ticks: u64,
    /// Regenerate the world every N ticks (0 = never)
    pub regenerate_every: u64,
    /// Patch count applied on regeneration (None = keep current)
    pub regenerate_patch_count: Option<u64>,
    /// Agent start position, absolute X
    pub spawn_x: i64,
    /// Agent start position, absolute Y
    pub spawn_y: i64,
    /// Seed for the agent's wandering (None = random)
    pub walk_seed: Option<u64>,

    // === Debug Settings ===
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,

    // === World Settings ===
    /// World generation parameters
    pub world: WorldConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticks: 10_000,
            regenerate_every: 0,
            regenerate_patch_count: None,
            spawn_x: 10,
            spawn_y: 10,
            walk_seed: None,

            log_filter: "explore=info".to_string(),

            world: WorldConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reads and parses the config at `path`.
    pub fn try_load<P: AsRef<Path>>(path: P) -> ExploreResult<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Loads the config at `path`, falling back to defaults when the file
    /// is missing, unreadable or malformed.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("No {} found, running with default settings", path.display());
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(config) => {
                info!(
                    "Read settings from {} ({} ticks, {}x{} chunks)",
                    path.display(),
                    config.ticks,
                    config.world.chunk_width,
                    config.world.chunk_height
                );
                config
            },
            Err(e) => {
                warn!("Ignoring {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(path, contents)?;

        info!("Wrote settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_common::ExploreError;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.ticks, 10_000);
        assert_eq!(config.regenerate_every, 0);
        assert_eq!((config.spawn_x, config.spawn_y), (10, 10));
        assert_eq!(config.world, WorldConfig::default());
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let mut config = EngineConfig::default();
        config.ticks = 42;
        config.walk_seed = Some(7);
        config.world = WorldConfig::new(32, 16, 5).with_seed(12345);

        config.save_to(&config_path).expect("Failed to save config");
        let loaded = EngineConfig::load_from(&config_path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let loaded = EngineConfig::load_from(temp_dir.path().join("missing.toml"));
        assert_eq!(loaded, EngineConfig::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "ticks = \"many\"").expect("Failed to write");

        assert_eq!(EngineConfig::load_from(&config_path), EngineConfig::default());
    }

    #[test]
    fn test_try_load_reports_cause() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = EngineConfig::try_load(temp_dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ExploreError::Io(_))));

        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[world]\nchunk_width = \"wide\"\n").expect("Failed to write");
        let malformed = EngineConfig::try_load(&config_path);
        assert!(matches!(
            malformed,
            Err(ExploreError::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            "regenerate_every = 500\n\n[world]\nchunk_width = 64\npatch_count = 3\n",
        )
        .expect("Failed to write");

        let loaded = EngineConfig::load_from(&config_path);
        assert_eq!(loaded.regenerate_every, 500);
        assert_eq!(loaded.ticks, 10_000);
        assert_eq!(loaded.world.chunk_width, 64);
        assert_eq!(loaded.world.chunk_height, 256);
        assert_eq!(loaded.world.patch_count, Some(3));
    }
}
