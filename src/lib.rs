//! Explainer renders scripted, animated explainer scenes about autonomous coding agents and
//! neural networks.
//!
//! A scene is authored with a [`SceneBuilder`], which records elements and an ordered
//! timeline of steps. The public flow is:
//!
//! - Build a [`Scene`] (directly, or by name through [`build_scene`])
//! - Evaluate any instant with [`Evaluator::eval_frame`]
//! - Render single frames or stream the whole timeline into a [`FrameSink`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod demo;
pub mod encode;
pub mod eval;
pub mod foundation;
pub mod layout;
pub mod render;
pub mod scene;
pub mod scenes;
pub mod timeline;

pub use crate::animation::ease::Ease;
pub use crate::config::{Quality, RenderConfig};
pub use crate::demo::gradient::GradientDescent;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::eval::evaluator::{EvaluatedFrame, Evaluator};
pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Point, Rect, Vec2};
pub use crate::foundation::error::{ExplainerError, ExplainerResult};
pub use crate::layout::network::NetworkLayout;
pub use crate::render::pipeline::{
    RenderSettings, RenderStats, RenderThreading, RenderToMp4Opts, render_frame, render_to_mp4,
    render_to_sink, write_still,
};
pub use crate::render::raster::{FrameRGBA, Rasterizer};
pub use crate::scene::dsl::{Animation, SceneBuilder};
pub use crate::scene::model::Scene;
pub use crate::scenes::registry::{Script, build_scene};
