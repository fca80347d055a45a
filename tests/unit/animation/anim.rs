use super::*;

#[test]
fn f64_lerp_hits_endpoints() {
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &4.0, 0.0), 2.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &4.0, 0.5), 3.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &4.0, 1.0), 4.0);
}

#[test]
fn point_lerp_is_componentwise() {
    let p = <Point as Lerp>::lerp(&Point::new(0.0, 0.0), &Point::new(2.0, -4.0), 0.25);
    assert_eq!(p, Point::new(0.5, -1.0));
}

#[test]
fn color_lerp_rounds_channels() {
    let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
    assert_eq!(mid, Color::rgb(128, 128, 128));
    assert_eq!(Color::lerp(&Color::RED, &Color::GREEN, 1.0), Color::GREEN);
}

#[test]
fn style_lerp_moves_every_field() {
    let a = Style::filled(Color::BLACK, 0.3);
    let b = Style::filled(Color::WHITE, 0.8).with_stroke(Color::WHITE, 3.0);
    let s = Style::lerp(&a, &b, 0.5);
    assert!((s.fill_opacity - 0.55).abs() < 1e-12);
    assert!((s.stroke_width - 1.5).abs() < 1e-12);
    assert_eq!(s.fill, Color::rgb(128, 128, 128));
}
