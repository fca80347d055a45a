//! Timeline replay into per-frame element states.

pub mod evaluator;
