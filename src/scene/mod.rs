//! Scene model and the builder used by the scripted scenes.

/// Scene authoring API (shapes, groups, steps).
pub mod dsl;
/// Built scene data.
pub mod model;
