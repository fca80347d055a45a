use crate::foundation::{
    core::{Point, Vec2},
    error::{ExplainerError, ExplainerResult},
};

/// Angle of the first point on a circular layout (top of the circle).
pub const FIRST_ANGLE_DEG: f64 = 90.0;

/// `n` points evenly spaced on a circle, starting at the top and going counter-clockwise.
pub fn circular(n: usize, radius: f64, center: Point) -> ExplainerResult<Vec<Point>> {
    if n == 0 {
        return Err(ExplainerError::invalid_layout(
            "circular layout needs at least one point",
        ));
    }
    let step = 360.0 / n as f64;
    let angles: Vec<f64> = (0..n).map(|i| FIRST_ANGLE_DEG + i as f64 * step).collect();
    circular_at_angles(&angles, radius, center)
}

/// Points on a circle at explicit angles (degrees, counter-clockwise from +x).
pub fn circular_at_angles(
    angles_deg: &[f64],
    radius: f64,
    center: Point,
) -> ExplainerResult<Vec<Point>> {
    if angles_deg.is_empty() {
        return Err(ExplainerError::invalid_layout(
            "circular layout needs at least one angle",
        ));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(ExplainerError::invalid_layout(format!(
            "circular layout radius must be finite and >= 0, got {radius}"
        )));
    }
    Ok(angles_deg
        .iter()
        .map(|deg| {
            let rad = deg.to_radians();
            center + Vec2::new(rad.cos(), rad.sin()) * radius
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/radial.rs"]
mod tests;
