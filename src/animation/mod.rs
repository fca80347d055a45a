//! Per-element animation effects and their easing.

/// Interpolation of animatable values.
pub mod anim;
/// Rate functions.
pub mod ease;
/// Animated element state and the effects that transform it.
pub mod effect;
