//! # Explore Common
//!
//! Common types and coordinate math for Explore.
//!
//! This crate provides foundational types used across all Explore crates:
//! - Coordinate types (absolute, chunk-relative) and the conversions between them
//! - Chunk identifiers
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;
