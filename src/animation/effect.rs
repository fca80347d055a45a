use crate::{
    animation::anim::Lerp,
    foundation::{
        color::Color,
        core::{Point, Vec2},
    },
    scene::model::{Element, Style},
};

/// Resolved, animatable state of one element at a point in time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementState {
    /// Whether the element is on screen at all.
    pub visible: bool,
    pub position: Point,
    /// Uniform scale about `position`.
    pub scale: f64,
    pub style: Style,
    /// Whole-element opacity multiplier.
    pub opacity: f64,
    /// Drawing progress for create/write style reveals, in `[0, 1]`.
    pub reveal: f64,
}

impl ElementState {
    /// Initial state: at its creation placement, fully drawn, not yet on screen.
    pub fn hidden(element: &Element) -> Self {
        Self {
            visible: false,
            position: element.position,
            scale: 1.0,
            style: element.style.clone(),
            opacity: 1.0,
            reveal: 1.0,
        }
    }
}

/// A transformation of one element over the course of an action.
///
/// `apply` writes only the properties the effect owns, so several effects may target the same
/// element within one step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Effect {
    /// Put the element on screen instantly.
    Add,
    /// Take the element off screen instantly.
    Remove,
    FadeIn {
        /// The element slides in along this vector, ending at its position.
        shift: Vec2,
        /// Starting scale factor (1.0 for none).
        scale: f64,
    },
    FadeOut {
        shift: Vec2,
    },
    /// Scale up from zero, optionally about a fixed point (group center, edge, arrow start).
    Grow {
        about: Option<Point>,
    },
    /// Stroke-drawing reveal.
    Create,
    /// Text-writing reveal.
    Write,
    MoveTo {
        to: Point,
    },
    /// Follow a path by arc length; the first point should be the current position.
    MoveAlong {
        path: Vec<Point>,
    },
    Shift {
        by: Vec2,
    },
    Scale {
        factor: f64,
        about: Option<Point>,
    },
    SetFill {
        color: Color,
        opacity: f64,
    },
    SetStroke {
        color: Color,
        width: f64,
    },
    /// Recolor both fill and stroke.
    SetColor {
        color: Color,
    },
    /// Morph into another style (the framework's `Transform` onto a restyled copy).
    Restyle {
        style: Style,
    },
}

impl Effect {
    /// Write the effect's owned properties for eased progress `p` into `out`.
    ///
    /// `start` is the element state at the beginning of the step.
    pub fn apply(&self, start: &ElementState, p: f64, out: &mut ElementState) {
        match self {
            Self::Add => out.visible = true,
            Self::Remove => out.visible = false,
            Self::FadeIn { shift, scale } => {
                out.visible = true;
                out.opacity = start.opacity * p;
                out.position = start.position - *shift * (1.0 - p);
                out.scale = start.scale * <f64 as Lerp>::lerp(scale, &1.0, p);
            }
            Self::FadeOut { shift } => {
                out.visible = p < 1.0;
                // A removed element keeps its opacity so a later fade-in starts from it.
                out.opacity = if p < 1.0 {
                    start.opacity * (1.0 - p)
                } else {
                    start.opacity
                };
                out.position = start.position + *shift * p;
            }
            Self::Grow { about } => {
                out.visible = true;
                out.scale = start.scale * p;
                if let Some(about) = about {
                    out.position = *about + (start.position - *about) * p;
                }
            }
            Self::Create | Self::Write => {
                out.visible = true;
                out.reveal = p;
            }
            Self::MoveTo { to } => {
                out.position = <Point as Lerp>::lerp(&start.position, to, p);
            }
            Self::MoveAlong { path } => {
                if let Some(point) = point_along(path, p) {
                    out.position = point;
                }
            }
            Self::Shift { by } => {
                out.position = start.position + *by * p;
            }
            Self::Scale { factor, about } => {
                let k = <f64 as Lerp>::lerp(&1.0, factor, p);
                out.scale = start.scale * k;
                if let Some(about) = about {
                    out.position = *about + (start.position - *about) * k;
                }
            }
            Self::SetFill { color, opacity } => {
                out.style.fill = Color::lerp(&start.style.fill, color, p);
                out.style.fill_opacity =
                    <f64 as Lerp>::lerp(&start.style.fill_opacity, opacity, p);
            }
            Self::SetStroke { color, width } => {
                out.style.stroke = Color::lerp(&start.style.stroke, color, p);
                out.style.stroke_width = <f64 as Lerp>::lerp(&start.style.stroke_width, width, p);
            }
            Self::SetColor { color } => {
                out.style.fill = Color::lerp(&start.style.fill, color, p);
                out.style.stroke = Color::lerp(&start.style.stroke, color, p);
            }
            Self::Restyle { style } => {
                out.style = Style::lerp(&start.style, style, p);
            }
        }
    }

    /// Short name used in schedule dumps and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::FadeIn { .. } => "fade_in",
            Self::FadeOut { .. } => "fade_out",
            Self::Grow { .. } => "grow",
            Self::Create => "create",
            Self::Write => "write",
            Self::MoveTo { .. } => "move_to",
            Self::MoveAlong { .. } => "move_along",
            Self::Shift { .. } => "shift",
            Self::Scale { .. } => "scale",
            Self::SetFill { .. } => "set_fill",
            Self::SetStroke { .. } => "set_stroke",
            Self::SetColor { .. } => "set_color",
            Self::Restyle { .. } => "restyle",
        }
    }
}

/// Point at fraction `p` of a polyline's arc length.
pub fn point_along(path: &[Point], p: f64) -> Option<Point> {
    let first = *path.first()?;
    let total: f64 = path.windows(2).map(|w| w[0].distance(w[1])).sum();
    if total <= 0.0 {
        return Some(first);
    }

    let mut remaining = p.clamp(0.0, 1.0) * total;
    for w in path.windows(2) {
        let len = w[0].distance(w[1]);
        if remaining <= len {
            let t = if len > 0.0 { remaining / len } else { 0.0 };
            return Some(<Point as Lerp>::lerp(&w[0], &w[1], t));
        }
        remaining -= len;
    }
    path.last().copied()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/effect.rs"]
mod tests;
