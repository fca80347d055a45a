use super::*;
use crate::scene::model::{ElementId, Geometry};

fn circle_at(x: f64, y: f64) -> Element {
    Element {
        id: ElementId(0),
        geometry: Geometry::Circle { radius: 0.25 },
        style: Style::stroked(Color::BLUE, 2.0).with_fill(Color::BLUE, 0.3),
        position: Point::new(x, y),
    }
}

fn shown(el: &Element) -> ElementState {
    ElementState {
        visible: true,
        ..ElementState::hidden(el)
    }
}

#[test]
fn fade_in_slides_from_offset_to_position() {
    let el = circle_at(1.0, 1.0);
    let start = ElementState::hidden(&el);
    let effect = Effect::FadeIn {
        shift: Vec2::new(0.0, 0.3),
        scale: 1.0,
    };

    let mut out = start.clone();
    effect.apply(&start, 0.0, &mut out);
    assert!(out.visible);
    assert_eq!(out.opacity, 0.0);
    assert!((out.position.y - 0.7).abs() < 1e-12);

    effect.apply(&start, 1.0, &mut out);
    assert_eq!(out.opacity, 1.0);
    assert_eq!(out.position, el.position);
}

#[test]
fn fade_in_with_scale_starts_scaled() {
    let el = circle_at(0.0, 0.0);
    let start = ElementState::hidden(&el);
    let effect = Effect::FadeIn {
        shift: Vec2::ZERO,
        scale: 2.0,
    };
    let mut out = start.clone();
    effect.apply(&start, 0.0, &mut out);
    assert_eq!(out.scale, 2.0);
    effect.apply(&start, 1.0, &mut out);
    assert_eq!(out.scale, 1.0);
}

#[test]
fn fade_out_hides_at_completion() {
    let el = circle_at(0.0, 0.0);
    let start = shown(&el);
    let mut out = start.clone();
    Effect::FadeOut { shift: Vec2::ZERO }.apply(&start, 0.5, &mut out);
    assert!(out.visible);
    assert_eq!(out.opacity, 0.5);
    Effect::FadeOut { shift: Vec2::ZERO }.apply(&start, 1.0, &mut out);
    assert!(!out.visible);
    assert_eq!(out.opacity, start.opacity);
}

#[test]
fn grow_about_anchor_moves_toward_position() {
    let el = circle_at(2.0, 0.0);
    let start = ElementState::hidden(&el);
    let mut out = start.clone();
    let effect = Effect::Grow {
        about: Some(Point::new(0.0, 0.0)),
    };
    effect.apply(&start, 0.5, &mut out);
    assert_eq!(out.scale, 0.5);
    assert_eq!(out.position, Point::new(1.0, 0.0));
    effect.apply(&start, 1.0, &mut out);
    assert_eq!(out.position, el.position);
}

#[test]
fn scale_without_anchor_keeps_position() {
    let el = circle_at(3.0, -1.0);
    let start = shown(&el);
    let mut out = start.clone();
    Effect::Scale {
        factor: 0.5,
        about: None,
    }
    .apply(&start, 1.0, &mut out);
    assert_eq!(out.scale, 0.5);
    assert_eq!(out.position, el.position);
}

#[test]
fn scale_about_group_center_spreads_members() {
    let el = circle_at(1.0, 0.0);
    let start = shown(&el);
    let mut out = start.clone();
    Effect::Scale {
        factor: 1.2,
        about: Some(Point::ORIGIN),
    }
    .apply(&start, 1.0, &mut out);
    assert!((out.position.x - 1.2).abs() < 1e-12);
}

#[test]
fn set_fill_only_touches_fill() {
    let el = circle_at(0.0, 0.0);
    let start = shown(&el);
    let mut out = start.clone();
    Effect::SetFill {
        color: Color::GREEN,
        opacity: 0.9,
    }
    .apply(&start, 1.0, &mut out);
    assert_eq!(out.style.fill, Color::GREEN);
    assert_eq!(out.style.fill_opacity, 0.9);
    assert_eq!(out.style.stroke, start.style.stroke);
    assert_eq!(out.position, start.position);
}

#[test]
fn move_along_follows_arc_length() {
    let path = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 3.0),
    ];
    assert_eq!(point_along(&path, 0.0), Some(Point::new(0.0, 0.0)));
    assert_eq!(point_along(&path, 0.25), Some(Point::new(1.0, 0.0)));
    assert_eq!(point_along(&path, 0.5), Some(Point::new(1.0, 1.0)));
    assert_eq!(point_along(&path, 1.0), Some(Point::new(1.0, 3.0)));
    assert_eq!(point_along(&[], 0.5), None);
}

#[test]
fn write_sets_reveal() {
    let el = circle_at(0.0, 0.0);
    let start = ElementState::hidden(&el);
    let mut out = start.clone();
    Effect::Write.apply(&start, 0.4, &mut out);
    assert!(out.visible);
    assert_eq!(out.reveal, 0.4);
}
