//! # Explore
//!
//! Headless host for the explore world: loads `explore.toml` (or the path
//! given as the first argument), installs logging, and lets one agent wander
//! the infinite chunked map for the configured number of ticks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod agent;
mod config;
mod session;

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{EngineConfig, CONFIG_FILE};
use crate::session::Session;

/// Filter used while the config file is being read.
const BOOTSTRAP_FILTER: &str = "explore=info";

/// Main entry point.
fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from);

    // The log filter lives in the config file, so loading logs through a bootstrap subscriber.
    let bootstrap = fmt().with_env_filter(BOOTSTRAP_FILTER).finish();
    let config = tracing::subscriber::with_default(bootstrap, || EngineConfig::load_from(&path));

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("Explore starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if !path.exists() {
        if let Err(e) = config.save_to(&path) {
            warn!("Failed to write default config: {e}");
        }
    }
    info!(
        "World: {}x{} chunks, {:?} patches, seed {:?}",
        config.world.chunk_width,
        config.world.chunk_height,
        config.world.patch_count,
        config.world.seed
    );

    let mut session = Session::new(config)?;
    session.run()?;

    let stats = session.stats();
    let position = session.explorer().position();
    info!(
        "Explore shutdown complete ({} chunks resident, {} regenerations, agent in chunk {} at {})",
        session.world().chunk_count(),
        stats.regenerations,
        position.chunk,
        position.local
    );
    Ok(())
}
