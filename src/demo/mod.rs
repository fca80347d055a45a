//! Numeric models behind the demo scenes.

pub mod gradient;
