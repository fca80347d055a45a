use crate::foundation::{
    core::{Point, Vec2},
    error::{ExplainerError, ExplainerResult},
};

/// Tick mark length in scene units.
const TICK_SIZE: f64 = 0.1;

/// Cartesian axes mapping data coordinates into a box of scene units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Axes {
    /// `(min, max, tick step)` along x.
    pub x_range: (f64, f64, f64),
    /// `(min, max, tick step)` along y.
    pub y_range: (f64, f64, f64),
    pub x_length: f64,
    pub y_length: f64,
    /// Scene position of the middle of the data box.
    pub center: Point,
}

impl Axes {
    pub fn new(
        x_range: (f64, f64, f64),
        y_range: (f64, f64, f64),
        x_length: f64,
        y_length: f64,
    ) -> ExplainerResult<Self> {
        for (axis, (min, max, step)) in [("x", x_range), ("y", y_range)] {
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(ExplainerError::invalid_layout(format!(
                    "{axis} range must satisfy min < max"
                )));
            }
            if !step.is_finite() || step <= 0.0 {
                return Err(ExplainerError::invalid_layout(format!(
                    "{axis} tick step must be > 0"
                )));
            }
        }
        if !(x_length > 0.0 && y_length > 0.0) {
            return Err(ExplainerError::invalid_layout("axis lengths must be > 0"));
        }
        Ok(Self {
            x_range,
            y_range,
            x_length,
            y_length,
            center: Point::ORIGIN,
        })
    }

    pub fn shifted(mut self, by: Vec2) -> Self {
        self.center += by;
        self
    }

    /// Data coordinates to scene point.
    pub fn coords_to_point(&self, x: f64, y: f64) -> Point {
        let (x0, x1, _) = self.x_range;
        let (y0, y1, _) = self.y_range;
        let sx = (x - (x0 + x1) / 2.0) / (x1 - x0) * self.x_length;
        let sy = (y - (y0 + y1) / 2.0) / (y1 - y0) * self.y_length;
        self.center + Vec2::new(sx, sy)
    }

    /// `(start, end)` of the x and y axis lines. Each axis crosses the other at data zero,
    /// clamped into range.
    pub fn axis_lines(&self) -> [(Point, Point); 2] {
        let (x0, x1, _) = self.x_range;
        let (y0, y1, _) = self.y_range;
        let cross_y = 0.0f64.clamp(y0, y1);
        let cross_x = 0.0f64.clamp(x0, x1);
        [
            (
                self.coords_to_point(x0, cross_y),
                self.coords_to_point(x1, cross_y),
            ),
            (
                self.coords_to_point(cross_x, y0),
                self.coords_to_point(cross_x, y1),
            ),
        ]
    }

    /// Short tick segments at every step along both axes, skipping the crossing point.
    pub fn ticks(&self) -> Vec<(Point, Point)> {
        let (x0, x1, xs) = self.x_range;
        let (y0, y1, ys) = self.y_range;
        let cross_y = 0.0f64.clamp(y0, y1);
        let cross_x = 0.0f64.clamp(x0, x1);
        let half = TICK_SIZE / 2.0;

        let mut out = Vec::new();
        for x in steps(x0, x1, xs).filter(|x| (x - cross_x).abs() > 1e-9) {
            let p = self.coords_to_point(x, cross_y);
            out.push((p - Vec2::new(0.0, half), p + Vec2::new(0.0, half)));
        }
        for y in steps(y0, y1, ys).filter(|y| (y - cross_y).abs() > 1e-9) {
            let p = self.coords_to_point(cross_x, y);
            out.push((p - Vec2::new(half, 0.0), p + Vec2::new(half, 0.0)));
        }
        out
    }

    /// Sample `f` at `samples` evenly spaced x values in `[x_min, x_max]`.
    pub fn plot(
        &self,
        f: impl Fn(f64) -> f64,
        x_min: f64,
        x_max: f64,
        samples: usize,
    ) -> Vec<Point> {
        let n = samples.max(2);
        (0..n)
            .map(|i| {
                let x = x_min + (x_max - x_min) * i as f64 / (n - 1) as f64;
                self.coords_to_point(x, f(x))
            })
            .collect()
    }
}

fn steps(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(move |k| k as f64 * step)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/axes.rs"]
mod tests;
