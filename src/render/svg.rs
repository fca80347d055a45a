use svg::{Document, node::element as svg_element};

use crate::{
    animation::effect::ElementState,
    eval::evaluator::EvaluatedFrame,
    foundation::{
        core::{Canvas, Point, Vec2},
        error::ExplainerResult,
    },
    scene::model::{EM_PER_FONT_SIZE, Element, Geometry, Scene},
};

/// Canvas height at which stroke widths are taken literally.
const REFERENCE_HEIGHT_PX: f64 = 1080.0;
const FONT_FAMILY: &str = "sans-serif";
/// Baseline offset below a line's vertical center, as a fraction of the font size.
const BASELINE_SHIFT: f64 = 0.35;
const GLYPH_ADVANCE: f64 = 0.55;
const LINE_HEIGHT: f64 = 1.2;
/// Elements scaled below this are not drawn.
const MIN_SCALE: f64 = 1e-6;

/// Serialize one evaluated frame as an SVG document sized to `canvas`.
#[tracing::instrument(skip(scene, frame), fields(scene = %scene.name, time = frame.time))]
pub fn frame_to_svg(scene: &Scene, frame: &EvaluatedFrame, canvas: Canvas) -> ExplainerResult<String> {
    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {} {}", canvas.width, canvas.height))
        .set("width", canvas.width)
        .set("height", canvas.height);

    let background = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("fill", scene.background.to_hex());
    doc = doc.add(background);

    let painter = Painter::new(canvas);
    for node in &frame.nodes {
        let element = scene.element(node.id)?;
        if let Some(group) = painter.paint(element, &node.state) {
            doc = doc.add(group);
        }
    }
    Ok(doc.to_string())
}

struct Painter {
    canvas: Canvas,
    px_per_unit: f64,
    stroke_scale: f64,
}

impl Painter {
    fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            px_per_unit: canvas.px_per_unit(),
            stroke_scale: f64::from(canvas.height) / REFERENCE_HEIGHT_PX,
        }
    }

    fn world(&self, state: &ElementState, local: Vec2) -> Point {
        self.canvas.to_px(state.position + local * state.scale)
    }

    fn paint(&self, element: &Element, state: &ElementState) -> Option<svg_element::Group> {
        if state.scale.abs() < MIN_SCALE || state.opacity <= 0.0 || state.reveal <= 0.0 {
            return None;
        }
        let style = &state.style;
        let stroke_px = style.stroke_width * self.stroke_scale;
        let stroke_opacity = style.stroke_opacity * state.opacity;

        let mut group = svg_element::Group::new().set("data-kind", element.geometry.kind());
        match &element.geometry {
            Geometry::Circle { radius } => {
                let c = self.canvas.to_px(state.position);
                let circle = svg_element::Circle::new()
                    .set("cx", c.x)
                    .set("cy", c.y)
                    .set("r", radius * state.scale * self.px_per_unit);
                group = group.add(self.closed_paint(circle, state, stroke_px, stroke_opacity));
            }
            Geometry::Rect {
                width,
                height,
                corner_radius,
            } => {
                let k = state.scale * self.px_per_unit;
                let top_left = self.world(state, Vec2::new(-width / 2.0, height / 2.0));
                let rect = svg_element::Rectangle::new()
                    .set("x", top_left.x)
                    .set("y", top_left.y)
                    .set("width", width * k)
                    .set("height", height * k)
                    .set("rx", corner_radius * k);
                group = group.add(self.closed_paint(rect, state, stroke_px, stroke_opacity));
            }
            Geometry::Line { start, end } => {
                let (a, b) = (
                    self.world(state, *start),
                    self.world(state, *start + (*end - *start) * state.reveal),
                );
                let line = svg_element::Line::new()
                    .set("x1", a.x)
                    .set("y1", a.y)
                    .set("x2", b.x)
                    .set("y2", b.y)
                    .set("stroke", style.stroke.to_hex())
                    .set("stroke-width", stroke_px)
                    .set("stroke-opacity", stroke_opacity)
                    .set("stroke-linecap", "round");
                group = group.add(line);
            }
            Geometry::Arrow {
                start,
                end,
                tip_length,
            } => {
                let tip_end = *start + (*end - *start) * state.reveal;
                let shown = (tip_end - *start).hypot();
                let tip = tip_length.min(shown);
                let dir = if shown > 0.0 {
                    (tip_end - *start) / shown
                } else {
                    Vec2::ZERO
                };
                let base = tip_end - dir * tip;
                let normal = Vec2::new(-dir.y, dir.x) * (tip / 2.0);

                let a = self.world(state, *start);
                let b = self.world(state, base);
                let shaft = svg_element::Line::new()
                    .set("x1", a.x)
                    .set("y1", a.y)
                    .set("x2", b.x)
                    .set("y2", b.y)
                    .set("stroke", style.stroke.to_hex())
                    .set("stroke-width", stroke_px)
                    .set("stroke-opacity", stroke_opacity);
                group = group.add(shaft);

                if tip > 0.0 {
                    let points = [tip_end, base + normal, base - normal]
                        .map(|p| self.world(state, p));
                    let head = svg_element::Polygon::new()
                        .set("points", points_attr(&points))
                        .set("fill", style.stroke.to_hex())
                        .set("fill-opacity", stroke_opacity);
                    group = group.add(head);
                }
            }
            Geometry::Polyline { points } => {
                let shown = partial_polyline(points, state.reveal);
                if shown.len() >= 2 {
                    let px: Vec<Point> = shown.iter().map(|p| self.world(state, *p)).collect();
                    let polyline = svg_element::Polyline::new()
                        .set("points", points_attr(&px))
                        .set("fill", "none")
                        .set("stroke", style.stroke.to_hex())
                        .set("stroke-width", stroke_px)
                        .set("stroke-opacity", stroke_opacity)
                        .set("stroke-linejoin", "round");
                    group = group.add(polyline);
                }
            }
            Geometry::Text {
                content,
                font_size,
                line_spacing,
            } => {
                let em = font_size * EM_PER_FONT_SIZE * state.scale;
                let font_px = em * self.px_per_unit;
                let lines: Vec<&str> = content.split('\n').collect();
                let line_h = LINE_HEIGHT * em * line_spacing;
                let block_h = lines.len() as f64 * line_h;
                let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                let left = -(widest as f64) * GLYPH_ADVANCE * em / 2.0;

                let mut budget = revealed_chars(content, state.reveal);
                for (i, line) in lines.iter().enumerate() {
                    if budget == 0 {
                        break;
                    }
                    let visible: String = line.chars().take(budget).collect();
                    budget -= visible.chars().count();
                    if visible.trim().is_empty() {
                        continue;
                    }
                    let center_y = block_h / 2.0 - (i as f64 + 0.5) * line_h;
                    let anchor = self.world_unscaled(state, Vec2::new(left, center_y));
                    let text = svg_element::Text::new(visible)
                        .set("x", anchor.x)
                        .set("y", anchor.y + BASELINE_SHIFT * font_px)
                        .set("font-family", FONT_FAMILY)
                        .set("font-size", font_px)
                        .set("fill", style.fill.to_hex())
                        .set("fill-opacity", style.fill_opacity * state.opacity);
                    group = group.add(text);
                }
            }
        }
        Some(group)
    }

    /// Offsets already in scaled units (text metrics fold the scale into the em size).
    fn world_unscaled(&self, state: &ElementState, local: Vec2) -> Point {
        self.canvas.to_px(state.position + local)
    }

    fn closed_paint<N>(
        &self,
        mut node: N,
        state: &ElementState,
        stroke_px: f64,
        stroke_opacity: f64,
    ) -> N
    where
        N: svg::Node,
    {
        let style = &state.style;
        // Closed shapes draw their outline first and fill in as the reveal completes.
        node.assign("fill", style.fill.to_hex());
        node.assign(
            "fill-opacity",
            style.fill_opacity * state.opacity * state.reveal,
        );
        if stroke_px > 0.0 {
            node.assign("stroke", style.stroke.to_hex());
            node.assign("stroke-width", stroke_px);
            node.assign("stroke-opacity", stroke_opacity);
        } else {
            node.assign("stroke", "none");
        }
        node
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of non-newline characters shown at `reveal` (rounded up so writing starts at once).
pub fn revealed_chars(content: &str, reveal: f64) -> usize {
    let total = content.chars().filter(|c| *c != '\n').count();
    ((reveal.clamp(0.0, 1.0) * total as f64).ceil() as usize).min(total)
}

/// Leading part of a polyline covering fraction `p` of its arc length.
pub fn partial_polyline(points: &[Vec2], p: f64) -> Vec<Vec2> {
    if p >= 1.0 || points.len() < 2 {
        return points.to_vec();
    }
    let total: f64 = points.windows(2).map(|w| (w[1] - w[0]).hypot()).sum();
    let mut remaining = p.max(0.0) * total;
    let mut out = vec![points[0]];
    for w in points.windows(2) {
        let len = (w[1] - w[0]).hypot();
        if remaining >= len {
            out.push(w[1]);
            remaining -= len;
        } else {
            if remaining > 0.0 && len > 0.0 {
                out.push(w[0] + (w[1] - w[0]) * (remaining / len));
            }
            break;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
