//! # Explore World
//!
//! World management for Explore.
//!
//! This crate handles:
//! - Tile and chunk data
//! - Procedural chunk generation (ground-cover patches, trees)
//! - Lazy chunk storage keyed by chunk id
//! - The world facade used by hosts, plus a thread-safe handle

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod chunk;
pub mod config;
pub mod generation;
pub mod shared;
pub mod store;
pub mod tile;
pub mod world;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chunk::*;
    pub use crate::config::*;
    pub use crate::generation::*;
    pub use crate::shared::*;
    pub use crate::store::*;
    pub use crate::tile::*;
    pub use crate::world::*;
}

pub use prelude::*;
