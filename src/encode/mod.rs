//! Encoding sinks.
//!
//! Sinks consume rendered frames in timeline order and are fed by
//! [`crate::render::pipeline::render_to_sink`].

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
