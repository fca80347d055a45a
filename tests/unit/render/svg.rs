use super::*;
use crate::{
    eval::evaluator::Evaluator,
    foundation::color::Color,
    scene::{
        dsl::{Animation, SceneBuilder},
        model::Style,
    },
};

const CANVAS: Canvas = Canvas {
    width: 854,
    height: 480,
};

fn sample_scene() -> Scene {
    let mut b = SceneBuilder::new("Sample");
    b.set_background(Color::rgb(0x1E, 0x1E, 0x2E));
    let c = b.circle(1.0, Style::stroked(Color::BLUE, 4.0).with_fill(Color::BLUE, 0.5));
    let t = b.text("Hello\nWorld", 36.0, Color::WHITE);
    b.next_to_default(t, c, crate::foundation::core::DOWN).unwrap();
    let a = b.arrow(Point::new(-3.0, 2.0), Point::new(3.0, 2.0), Color::GREEN, 3.0);
    b.play([Animation::grow(c), Animation::grow_arrow(a)]).unwrap();
    b.play([Animation::write(t)]).unwrap();
    b.build().unwrap()
}

#[test]
fn final_frame_contains_every_shape() {
    let scene = sample_scene();
    let frame = Evaluator::eval_frame(&scene, scene.duration()).unwrap();
    let svg = frame_to_svg(&scene, &frame, CANVAS).unwrap();

    assert!(svg.contains("viewBox=\"0 0 854 480\""));
    assert!(svg.contains("#1e1e2e"));
    assert!(svg.contains("<circle"));
    assert!(svg.contains("<polygon"));
    assert!(svg.contains("Hello"));
    assert!(svg.contains("World"));
}

#[test]
fn first_frame_is_background_only() {
    let scene = sample_scene();
    let frame = Evaluator::eval_frame(&scene, 0.0).unwrap();
    let svg = frame_to_svg(&scene, &frame, CANVAS).unwrap();
    assert!(!svg.contains("<circle"));
    assert!(!svg.contains("<text"));
    assert!(svg.contains("<rect"));
}

#[test]
fn half_written_text_shows_a_prefix() {
    let scene = sample_scene();
    let frame = Evaluator::eval_frame(&scene, 1.5).unwrap();
    let svg = frame_to_svg(&scene, &frame, CANVAS).unwrap();
    assert!(svg.contains("Hello"));
    assert!(!svg.contains("World"));
}

#[test]
fn revealed_chars_rounds_up() {
    assert_eq!(revealed_chars("abcd", 0.0), 0);
    assert_eq!(revealed_chars("abcd", 0.1), 1);
    assert_eq!(revealed_chars("ab\ncd", 0.5), 2);
    assert_eq!(revealed_chars("ab\ncd", 1.0), 4);
}

#[test]
fn partial_polyline_cuts_mid_segment() {
    let pts = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(2.0, 2.0)];
    let half = partial_polyline(&pts, 0.5);
    assert_eq!(half, vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0)]);
    let quarter = partial_polyline(&pts, 0.25);
    assert_eq!(quarter, vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
    assert_eq!(partial_polyline(&pts, 1.0).len(), 3);
}
