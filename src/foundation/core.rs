use crate::foundation::error::{ExplainerError, ExplainerResult};

pub use kurbo::{Point, Rect, Vec2};

/// Height of the visible frame in scene units.
pub const FRAME_HEIGHT: f64 = 8.0;
/// Width of the visible frame in scene units (16:9).
pub const FRAME_WIDTH: f64 = FRAME_HEIGHT * 16.0 / 9.0;

/// Scene-space origin (frame center).
pub const ORIGIN: Point = Point::new(0.0, 0.0);
/// Unit vector pointing up (scene y grows upward).
pub const UP: Vec2 = Vec2::new(0.0, 1.0);
/// Unit vector pointing down.
pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);
/// Unit vector pointing left.
pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
/// Unit vector pointing right.
pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);
/// Up-right diagonal (not normalized; used for corners).
pub const UR: Vec2 = Vec2::new(1.0, 1.0);
/// Up-left diagonal.
pub const UL: Vec2 = Vec2::new(-1.0, 1.0);
/// Down-right diagonal.
pub const DR: Vec2 = Vec2::new(1.0, -1.0);
/// Down-left diagonal.
pub const DL: Vec2 = Vec2::new(-1.0, -1.0);

/// Timeline frame index (0-based).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frames-per-second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> ExplainerResult<Self> {
        if den == 0 {
            return Err(ExplainerError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ExplainerError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of a frame in seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Number of frames needed to cover `secs` (rounded up).
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        // Guard against 2.9999999 * 30 style float noise before ceiling.
        let raw = secs * self.as_f64();
        let rounded = raw.round();
        let frames = if (raw - rounded).abs() < 1e-6 {
            rounded
        } else {
            raw.ceil()
        };
        frames.max(0.0) as u64
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Pixels per scene unit (the frame height always maps to the canvas height).
    pub fn px_per_unit(self) -> f64 {
        f64::from(self.height) / FRAME_HEIGHT
    }

    /// Map a scene point (y up, origin centered) to canvas pixels (y down, origin top-left).
    pub fn to_px(self, p: Point) -> Point {
        let k = self.px_per_unit();
        Point::new(
            f64::from(self.width) * 0.5 + p.x * k,
            f64::from(self.height) * 0.5 - p.y * k,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
