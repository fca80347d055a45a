//! Frame rendering: evaluated frame to SVG, SVG to pixels, and the multi-frame pipeline.

/// Frame and scene rendering entry points.
pub mod pipeline;
/// SVG rasterization.
pub mod raster;
/// SVG serialization of an evaluated frame.
pub mod svg;
