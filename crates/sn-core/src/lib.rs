//! sn-core: shared types, IDs, errors, and configuration.
//!
//! This crate is the foundational dependency for the other sn-* crates,
//! providing the movie-info record type, a unified error type, and the
//! JSON configuration for both services.

pub mod config;
pub mod error;
pub mod ids;
pub mod media;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use ids::MovieInfoId;
pub use media::*;
