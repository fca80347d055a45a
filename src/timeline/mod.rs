//! Step sequencing with lagged lanes.

pub mod sequencer;
