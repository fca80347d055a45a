//! Scene-space primitives shared by every other module.

/// Colors and the framework's named palette.
pub mod color;
/// Frame geometry, direction vectors and timing types.
pub mod core;
/// Crate error taxonomy.
pub mod error;
