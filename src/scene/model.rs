use crate::{
    foundation::{
        color::Color,
        core::{Point, Rect, Vec2},
        error::{ExplainerError, ExplainerResult},
    },
    timeline::sequencer::Timeline,
};

/// Scene units per font-size point. A 48pt title is roughly 0.6 units tall.
pub const EM_PER_FONT_SIZE: f64 = 0.0125;
/// Average glyph advance as a fraction of the em size.
const GLYPH_ADVANCE: f64 = 0.55;
/// Line box height as a fraction of the em size (before `line_spacing`).
const LINE_HEIGHT: f64 = 1.2;

/// Stable element identifier, equal to the element's index in [`Scene::elements`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

impl ElementId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable group identifier, equal to the group's index in [`Scene::groups`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GroupId(pub u32);

impl GroupId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Something an animation can be pointed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Target {
    Element(ElementId),
    Group(GroupId),
}

impl From<ElementId> for Target {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl From<GroupId> for Target {
    fn from(id: GroupId) -> Self {
        Self::Group(id)
    }
}

/// Paint attributes shared by all elements.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    pub fill: Color,
    pub fill_opacity: f64,
    pub stroke: Color,
    /// Stroke width in the framework's units (4.0 is a regular line at 1080p).
    pub stroke_width: f64,
    pub stroke_opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self::stroked(Color::WHITE, 4.0)
    }
}

impl Style {
    /// Outline only.
    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            fill: color,
            fill_opacity: 0.0,
            stroke: color,
            stroke_width: width,
            stroke_opacity: 1.0,
        }
    }

    /// Solid fill without outline.
    pub fn filled(color: Color, opacity: f64) -> Self {
        Self {
            fill: color,
            fill_opacity: opacity,
            stroke: color,
            stroke_width: 0.0,
            stroke_opacity: 1.0,
        }
    }

    pub fn with_fill(mut self, color: Color, opacity: f64) -> Self {
        self.fill = color;
        self.fill_opacity = opacity;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = color;
        self.stroke_width = width;
        self
    }

    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = opacity;
        self
    }

    /// Text is painted with its fill color.
    pub fn text(color: Color) -> Self {
        Self::filled(color, 1.0)
    }
}

/// Shape of an element, in coordinates local to the element's position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Geometry {
    Circle {
        radius: f64,
    },
    Rect {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Line {
        start: Vec2,
        end: Vec2,
    },
    Arrow {
        start: Vec2,
        end: Vec2,
        tip_length: f64,
    },
    /// Open polyline (function plots, axis lines).
    Polyline {
        points: Vec<Vec2>,
    },
    Text {
        content: String,
        font_size: f64,
        line_spacing: f64,
    },
}

impl Geometry {
    /// Axis-aligned bounds in local coordinates.
    pub fn local_bounds(&self) -> Rect {
        match self {
            Self::Circle { radius } => Rect::new(-radius, -radius, *radius, *radius),
            Self::Rect { width, height, .. } => {
                Rect::new(-width / 2.0, -height / 2.0, width / 2.0, height / 2.0)
            }
            Self::Line { start, end } | Self::Arrow { start, end, .. } => {
                Rect::from_points(start.to_point(), end.to_point())
            }
            Self::Polyline { points } => points_bounds(points),
            Self::Text {
                content,
                font_size,
                line_spacing,
            } => {
                let (w, h) = text_extent(content, *font_size, *line_spacing);
                Rect::new(-w / 2.0, -h / 2.0, w / 2.0, h / 2.0)
            }
        }
    }

    /// Same shape, uniformly scaled about the local origin.
    pub fn scaled(&self, k: f64) -> Self {
        match self {
            Self::Circle { radius } => Self::Circle { radius: radius * k },
            Self::Rect {
                width,
                height,
                corner_radius,
            } => Self::Rect {
                width: width * k,
                height: height * k,
                corner_radius: corner_radius * k,
            },
            Self::Line { start, end } => Self::Line {
                start: *start * k,
                end: *end * k,
            },
            Self::Arrow {
                start,
                end,
                tip_length,
            } => Self::Arrow {
                start: *start * k,
                end: *end * k,
                tip_length: tip_length * k,
            },
            Self::Polyline { points } => Self::Polyline {
                points: points.iter().map(|p| *p * k).collect(),
            },
            Self::Text {
                content,
                font_size,
                line_spacing,
            } => Self::Text {
                content: content.clone(),
                font_size: font_size * k,
                line_spacing: *line_spacing,
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Rect { .. } => "rect",
            Self::Line { .. } => "line",
            Self::Arrow { .. } => "arrow",
            Self::Polyline { .. } => "polyline",
            Self::Text { .. } => "text",
        }
    }
}

/// Estimated (width, height) of a text block in scene units.
///
/// No font shaping happens at layout time; the estimate only drives relative placement.
pub fn text_extent(content: &str, font_size: f64, line_spacing: f64) -> (f64, f64) {
    let em = font_size * EM_PER_FONT_SIZE;
    let lines = content.split('\n').count().max(1);
    let widest = content
        .split('\n')
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let width = widest as f64 * GLYPH_ADVANCE * em;
    let height = lines as f64 * LINE_HEIGHT * em * line_spacing.max(0.0);
    (width, height)
}

fn points_bounds(points: &[Vec2]) -> Rect {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return Rect::ZERO;
    };
    iter.fold(Rect::from_points(first.to_point(), first.to_point()), |r, p| {
        r.union_pt(p.to_point())
    })
}

/// A drawable element with its creation-time placement.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub geometry: Geometry,
    pub style: Style,
    /// Center (or reference point for lines) in scene units.
    pub position: Point,
}

impl Element {
    /// World-space bounds at the element's creation-time position.
    pub fn bounds(&self) -> Rect {
        self.geometry.local_bounds() + self.position.to_vec2()
    }
}

/// Ordered collection of elements moved and animated together.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    pub id: GroupId,
    /// Flattened member elements in insertion order.
    pub children: Vec<ElementId>,
}

/// One layer of a displayed network: neurons share a size and a display color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    pub neurons: Vec<ElementId>,
    pub group: GroupId,
    pub color: Color,
}

/// A drawn line between two neurons. It carries no weight or value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Connection {
    pub from: ElementId,
    pub to: ElementId,
    pub line: ElementId,
}

/// A fully built scene: elements, groups and the ordered animation timeline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub name: String,
    pub background: Color,
    pub elements: Vec<Element>,
    pub groups: Vec<Group>,
    pub timeline: Timeline,
}

impl Scene {
    pub fn element(&self, id: ElementId) -> ExplainerResult<&Element> {
        self.elements
            .get(id.index())
            .ok_or_else(|| ExplainerError::validation(format!("unknown element id {}", id.0)))
    }

    pub fn group(&self, id: GroupId) -> ExplainerResult<&Group> {
        self.groups
            .get(id.index())
            .ok_or_else(|| ExplainerError::validation(format!("unknown group id {}", id.0)))
    }

    /// Total timeline duration in seconds.
    pub fn duration(&self) -> f64 {
        self.timeline.duration()
    }

    pub fn validate(&self) -> ExplainerResult<()> {
        if self.name.trim().is_empty() {
            return Err(ExplainerError::validation("scene name must be non-empty"));
        }
        for (idx, el) in self.elements.iter().enumerate() {
            if el.id.index() != idx {
                return Err(ExplainerError::validation(format!(
                    "element {idx} carries mismatched id {}",
                    el.id.0
                )));
            }
            if !el.position.x.is_finite() || !el.position.y.is_finite() {
                return Err(ExplainerError::validation(format!(
                    "element {idx} has a non-finite position"
                )));
            }
        }
        for group in &self.groups {
            for child in &group.children {
                self.element(*child)?;
            }
        }
        self.timeline.validate()?;
        for action in self.timeline.actions() {
            self.element(action.target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
