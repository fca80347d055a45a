use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    encode::{
        ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir},
        sink::{FrameSink, SinkConfig},
    },
    eval::evaluator::Evaluator,
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::{ExplainerError, ExplainerResult},
    },
    render::{
        raster::{FrameRGBA, Rasterizer},
        svg::frame_to_svg,
    },
    scene::model::Scene,
};

/// Output size and frame rate of a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub canvas: Canvas,
    pub fps: Fps,
}

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Rasterize frames of a chunk in parallel when `true`.
    pub parallel: bool,
    /// Chunk size in frames; frames are handed to the sink chunk by chunk.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters reported after a multi-frame render.
pub struct RenderStats {
    /// Frames delivered to the sink.
    pub frames: u64,
    /// Chunks rendered.
    pub chunks: u64,
}

/// Number of frames covering the scene; never zero, so a scene without steps still renders.
pub fn frame_count(scene: &Scene, fps: Fps) -> u64 {
    fps.secs_to_frames_ceil(scene.duration()).max(1)
}

/// Scene time of a frame, clamped to the scene duration.
pub fn frame_time(scene: &Scene, fps: Fps, idx: FrameIndex) -> f64 {
    fps.frames_to_secs(idx.0).min(scene.duration())
}

/// Evaluate, serialize and rasterize a single instant of the scene.
pub fn render_frame(
    scene: &Scene,
    time_s: f64,
    canvas: Canvas,
    raster: &Rasterizer,
) -> ExplainerResult<FrameRGBA> {
    let frame = Evaluator::eval_frame(scene, time_s)?;
    let svg = frame_to_svg(scene, &frame, canvas)?;
    raster.rasterize(&svg, canvas)
}

/// Render every frame of the scene into memory.
pub fn render_frames(
    scene: &Scene,
    settings: RenderSettings,
    threading: &RenderThreading,
    raster: &Rasterizer,
) -> ExplainerResult<Vec<FrameRGBA>> {
    let mut sink = crate::encode::sink::InMemorySink::new();
    render_to_sink(scene, settings, threading, raster, &mut sink)?;
    Ok(sink.frames().iter().map(|(_, f)| f.clone()).collect())
}

/// Render every frame of the scene into `sink`, in frame order.
#[tracing::instrument(skip_all, fields(scene = %scene.name))]
pub fn render_to_sink(
    scene: &Scene,
    settings: RenderSettings,
    threading: &RenderThreading,
    raster: &Rasterizer,
    sink: &mut dyn FrameSink,
) -> ExplainerResult<RenderStats> {
    scene.validate()?;
    let total = frame_count(scene, settings.fps);
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    tracing::info!(
        frames = total,
        width = settings.canvas.width,
        height = settings.canvas.height,
        fps = settings.fps.as_f64(),
        parallel = threading.parallel,
        "rendering scene"
    );

    sink.begin(SinkConfig {
        width: settings.canvas.width,
        height: settings.canvas.height,
        fps: settings.fps,
    })?;

    match push_all_frames(scene, settings, raster, pool.as_ref(), chunk_size, total, sink) {
        Ok(stats) => {
            sink.end()?;
            Ok(stats)
        }
        Err(e) => {
            tracing::warn!(error = %e, "render failed, discarding partial output");
            sink.abort();
            Err(e)
        }
    }
}

fn push_all_frames(
    scene: &Scene,
    settings: RenderSettings,
    raster: &Rasterizer,
    pool: Option<&rayon::ThreadPool>,
    chunk_size: u64,
    total: u64,
    sink: &mut dyn FrameSink,
) -> ExplainerResult<RenderStats> {
    let mut stats = RenderStats::default();
    let mut chunk_start = 0;
    while chunk_start < total {
        let chunk_end = (chunk_start + chunk_size).min(total);
        let frames = match pool {
            Some(pool) => render_chunk_parallel(scene, settings, raster, pool, chunk_start..chunk_end)?,
            None => (chunk_start..chunk_end)
                .map(|f| {
                    let t = frame_time(scene, settings.fps, FrameIndex(f));
                    render_frame(scene, t, settings.canvas, raster)
                })
                .collect::<ExplainerResult<Vec<_>>>()?,
        };

        for (offset, frame) in frames.iter().enumerate() {
            sink.push_frame(FrameIndex(chunk_start + offset as u64), frame)?;
        }
        stats.frames += frames.len() as u64;
        stats.chunks += 1;
        tracing::debug!(start = chunk_start, end = chunk_end, "chunk rendered");
        chunk_start = chunk_end;
    }
    Ok(stats)
}

fn render_chunk_parallel(
    scene: &Scene,
    settings: RenderSettings,
    raster: &Rasterizer,
    pool: &rayon::ThreadPool,
    range: std::ops::Range<u64>,
) -> ExplainerResult<Vec<FrameRGBA>> {
    // Collecting an indexed parallel iterator keeps frame order.
    pool.install(|| {
        range
            .into_par_iter()
            .map(|f| {
                let t = frame_time(scene, settings.fps, FrameIndex(f));
                render_frame(scene, t, settings.canvas, raster)
            })
            .collect::<ExplainerResult<Vec<_>>>()
    })
}

/// Options for [`render_to_mp4`].
#[derive(Clone, Debug)]
pub struct RenderToMp4Opts {
    /// Replace an existing output file.
    pub overwrite: bool,
    pub threading: RenderThreading,
}

impl Default for RenderToMp4Opts {
    fn default() -> Self {
        Self {
            overwrite: true,
            threading: RenderThreading::default(),
        }
    }
}

/// Render the scene to an MP4 by streaming frames into the system `ffmpeg`.
pub fn render_to_mp4(
    scene: &Scene,
    out_path: impl Into<PathBuf>,
    settings: RenderSettings,
    opts: &RenderToMp4Opts,
    raster: &Rasterizer,
) -> ExplainerResult<RenderStats> {
    let mut sink_opts = FfmpegSinkOpts::new(out_path);
    sink_opts.overwrite = opts.overwrite;
    sink_opts.background = scene.background;
    let mut sink = FfmpegSink::new(sink_opts);
    render_to_sink(scene, settings, &opts.threading, raster, &mut sink)
}

/// Write a frame as PNG (straight alpha).
pub fn write_png(frame: &FrameRGBA, path: &Path) -> ExplainerResult<()> {
    use anyhow::Context as _;
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Write one instant of the scene to `path`: SVG for `.svg`, PNG for `.png`.
pub fn write_still(
    scene: &Scene,
    time_s: f64,
    canvas: Canvas,
    raster: &Rasterizer,
    path: &Path,
) -> ExplainerResult<()> {
    use anyhow::Context as _;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            let frame = Evaluator::eval_frame(scene, time_s)?;
            let svg = frame_to_svg(scene, &frame, canvas)?;
            ensure_parent_dir(path)?;
            std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))?;
            Ok(())
        }
        Some("png") => write_png(&render_frame(scene, time_s, canvas, raster)?, path),
        _ => Err(ExplainerError::validation(format!(
            "unsupported still output '{}' (expected .png or .svg)",
            path.display()
        ))),
    }
}

fn build_thread_pool(threads: Option<usize>) -> ExplainerResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ExplainerError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ExplainerError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
