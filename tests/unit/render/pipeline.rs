use super::*;
use crate::{
    encode::sink::InMemorySink,
    foundation::color::Color,
    scene::{
        dsl::{Animation, SceneBuilder},
        model::Style,
    },
};

const SETTINGS: RenderSettings = RenderSettings {
    canvas: Canvas {
        width: 64,
        height: 36,
    },
    fps: Fps { num: 10, den: 1 },
};

fn short_scene() -> Scene {
    let mut b = SceneBuilder::new("Short");
    b.set_background(Color::rgb(0x1E, 0x1E, 0x2E));
    let c = b.circle(1.5, Style::filled(Color::RED, 1.0));
    b.play_for(0.5, [Animation::fade_in(c)]).unwrap();
    b.wait(0.25).unwrap();
    b.build().unwrap()
}

#[test]
fn frame_count_covers_duration() {
    let scene = short_scene();
    assert_eq!(frame_count(&scene, SETTINGS.fps), 8);
    let empty = SceneBuilder::new("Empty").build().unwrap();
    assert_eq!(frame_count(&empty, SETTINGS.fps), 1);
}

#[test]
fn sink_receives_ordered_frames() {
    let scene = short_scene();
    let raster = Rasterizer::new();
    let mut sink = InMemorySink::new();
    let stats = render_to_sink(
        &scene,
        SETTINGS,
        &RenderThreading {
            parallel: true,
            chunk_size: 3,
            threads: Some(2),
        },
        &raster,
        &mut sink,
    )
    .unwrap();

    assert_eq!(stats.frames, 8);
    assert_eq!(stats.chunks, 3);
    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().width, 64);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (0..8).collect::<Vec<_>>());
}

#[test]
fn parallel_and_sequential_agree() {
    let scene = short_scene();
    let raster = Rasterizer::new();
    let seq = render_frames(&scene, SETTINGS, &RenderThreading::default(), &raster).unwrap();
    let par = render_frames(
        &scene,
        SETTINGS,
        &RenderThreading {
            parallel: true,
            chunk_size: 4,
            threads: Some(2),
        },
        &raster,
    )
    .unwrap();
    assert_eq!(seq.len(), par.len());
    for (a, b) in seq.iter().zip(&par) {
        assert_eq!(a.data, b.data);
    }
}

#[test]
fn first_frame_is_background_last_shows_circle() {
    let scene = short_scene();
    let raster = Rasterizer::new();
    let first = render_frame(&scene, 0.0, SETTINGS.canvas, &raster).unwrap();
    let last = render_frame(&scene, scene.duration(), SETTINGS.canvas, &raster).unwrap();

    let center = ((18 * 64 + 32) * 4) as usize;
    assert_eq!(&first.data[center..center + 4], &[0x1E, 0x1E, 0x2E, 255]);
    assert_eq!(&last.data[center..center + 4], &[0xFC, 0x62, 0x55, 255]);
}

#[test]
fn still_output_by_extension() {
    let scene = short_scene();
    let raster = Rasterizer::new();
    let dir = std::env::temp_dir().join(format!("explainer-still-{}", std::process::id()));
    let svg = dir.join("f.svg");
    let png = dir.join("f.png");

    write_still(&scene, 0.5, SETTINGS.canvas, &raster, &svg).unwrap();
    write_still(&scene, 0.5, SETTINGS.canvas, &raster, &png).unwrap();
    assert!(std::fs::read_to_string(&svg).unwrap().contains("<circle"));
    let img = image::open(&png).unwrap();
    assert_eq!((img.width(), img.height()), (64, 36));
    assert!(write_still(&scene, 0.5, SETTINGS.canvas, &raster, &dir.join("f.gif")).is_err());
    let _ = std::fs::remove_dir_all(dir);
}

/// Refuses frames from `fail_at` on.
#[derive(Default)]
struct RefusingSink {
    fail_at: u64,
    pushed: u64,
    ended: bool,
    aborted: bool,
}

impl FrameSink for RefusingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> ExplainerResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRGBA) -> ExplainerResult<()> {
        if idx.0 >= self.fail_at {
            return Err(ExplainerError::evaluation("disk full"));
        }
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> ExplainerResult<()> {
        self.ended = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}

#[test]
fn failed_render_aborts_sink_instead_of_ending() {
    let scene = short_scene();
    let raster = Rasterizer::new();
    let mut sink = RefusingSink {
        fail_at: 5,
        ..RefusingSink::default()
    };
    let err = render_to_sink(
        &scene,
        SETTINGS,
        &RenderThreading {
            chunk_size: 2,
            ..RenderThreading::default()
        },
        &raster,
        &mut sink,
    )
    .unwrap_err();

    assert!(err.to_string().contains("disk full"));
    assert_eq!(sink.pushed, 5);
    assert!(sink.aborted);
    assert!(!sink.ended);
}
