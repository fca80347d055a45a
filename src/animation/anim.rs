use crate::{
    foundation::{
        color::Color,
        core::{Point, Vec2},
    },
    scene::model::Style,
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    /// Exact at both ends (`t == 0` gives `a`, `t == 1` gives `b`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

impl Lerp for Style {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            fill: Color::lerp(&a.fill, &b.fill, t),
            fill_opacity: <f64 as Lerp>::lerp(&a.fill_opacity, &b.fill_opacity, t),
            stroke: Color::lerp(&a.stroke, &b.stroke, t),
            stroke_width: <f64 as Lerp>::lerp(&a.stroke_width, &b.stroke_width, t),
            stroke_opacity: <f64 as Lerp>::lerp(&a.stroke_opacity, &b.stroke_opacity, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
