//! Relative placement helpers over bounding boxes.
//!
//! Every function is pure: it returns the shift (or point) that would place a box, and leaves
//! applying it to the caller.

use crate::foundation::core::{FRAME_HEIGHT, FRAME_WIDTH, Point, Rect, Vec2};

/// Default gap used by `next_to`.
pub const DEFAULT_BUFF: f64 = 0.25;
/// Default margin used by `to_edge`.
pub const DEFAULT_EDGE_BUFF: f64 = 0.5;

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn sign_vec(dir: Vec2) -> Vec2 {
    Vec2::new(sign(dir.x), sign(dir.y))
}

/// Point of `rect` in direction `dir`: center, edge midpoints or corners.
pub fn edge_point(rect: Rect, dir: Vec2) -> Point {
    let d = sign_vec(dir);
    rect.center() + Vec2::new(d.x * rect.width() / 2.0, d.y * rect.height() / 2.0)
}

/// Shift that pushes `rect` against the frame border in `dir`, leaving `buff` of margin.
///
/// Only the axes named by `dir` move; a diagonal direction places the box in a corner.
pub fn to_edge(rect: Rect, dir: Vec2, buff: f64) -> Vec2 {
    let d = sign_vec(dir);
    let frame = Vec2::new(FRAME_WIDTH / 2.0 * d.x, FRAME_HEIGHT / 2.0 * d.y);
    let align = edge_point(rect, d).to_vec2();
    let shift = frame - align - d * buff;
    Vec2::new(shift.x * d.x.abs(), shift.y * d.y.abs())
}

/// Shift that places `rect` beside `anchor` in `dir`, `buff` apart.
///
/// `aligned_edge` lines up the matching edges of both boxes (zero keeps centers aligned).
pub fn next_to(rect: Rect, anchor: Rect, dir: Vec2, buff: f64, aligned_edge: Vec2) -> Vec2 {
    let d = sign_vec(dir);
    let e = sign_vec(aligned_edge);
    let target = edge_point(anchor, e + d);
    let align = edge_point(rect, e - d);
    (target - align) + d * buff
}

/// Shift that lines up the `dir` edge of `rect` with the same edge of `anchor`.
pub fn align_to(rect: Rect, anchor: Rect, dir: Vec2) -> Vec2 {
    let d = sign_vec(dir);
    let delta = edge_point(anchor, d) - edge_point(rect, d);
    Vec2::new(delta.x * d.x.abs(), delta.y * d.y.abs())
}

/// Shifts that chain `rects` one after another in `dir`, then center the whole run on the origin.
pub fn arrange(rects: &[Rect], dir: Vec2, buff: f64, aligned_edge: Vec2) -> Vec<Vec2> {
    let Some(first) = rects.first() else {
        return Vec::new();
    };

    let mut shifts = vec![Vec2::ZERO];
    let mut prev = *first;
    for rect in &rects[1..] {
        let shift = next_to(*rect, prev, dir, buff, aligned_edge);
        prev = *rect + shift;
        shifts.push(shift);
    }

    let union = rects
        .iter()
        .zip(&shifts)
        .map(|(r, s)| *r + *s)
        .reduce(|a, b| a.union(b))
        .unwrap_or(*first);
    let recenter = Point::ORIGIN - union.center();
    shifts.into_iter().map(|s| s + recenter).collect()
}

/// Union of several boxes (`None` for an empty slice).
pub fn union_all(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    rects.into_iter().reduce(|a, b| a.union(b))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arrange.rs"]
mod tests;
