use crate::{
    animation::{
        ease::Ease,
        effect::{Effect, ElementState},
    },
    eval::evaluator::apply_step,
    foundation::{
        color::Color,
        core::{Point, Rect, Vec2},
        error::{ExplainerError, ExplainerResult},
    },
    layout::{
        arrange::{self, DEFAULT_BUFF, DEFAULT_EDGE_BUFF},
        axes::Axes,
    },
    scene::model::{Element, ElementId, Geometry, Group, GroupId, Scene, Style, Target},
    timeline::sequencer::{
        Action, FULL_WINDOW, INSTANT, Lane, Slot, Step, Timeline, compose_window, stagger_window,
    },
};

/// Gap trimmed from both ends of an arrow unless asked otherwise.
pub const DEFAULT_ARROW_BUFF: f64 = 0.25;
/// Longest tip an arrow gets, in scene units.
pub const DEFAULT_TIP_LENGTH: f64 = 0.35;
/// Tip length cap as a fraction of the arrow length.
pub const DEFAULT_TIP_RATIO: f64 = 0.25;
/// Stroke width of a regular line.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
/// Run time of a `play` call without an explicit duration.
pub const DEFAULT_RUN_TIME: f64 = 1.0;
/// Samples taken along a plotted function.
pub const CURVE_SAMPLES: usize = 65;

/// What an animation does to its target.
#[derive(Clone, Debug, PartialEq)]
pub enum Motion {
    FadeIn { shift: Vec2, scale: f64 },
    FadeOut { shift: Vec2 },
    GrowFromCenter,
    GrowFromEdge(Vec2),
    GrowArrow,
    Create,
    Write,
    /// Move the target's center to a point.
    MoveTo(Point),
    /// Move the target's center along a path that starts at the current center.
    MoveAlong(Vec<Point>),
    Shift(Vec2),
    /// Scale about the target's center.
    Scale(f64),
    SetFill(Color, f64),
    SetStroke(Color, f64),
    SetColor(Color),
    Restyle(Style),
    Remove,
}

impl Motion {
    fn default_ease(&self) -> Ease {
        match self {
            Self::Write => Ease::Linear,
            _ => Ease::Smooth,
        }
    }
}

/// Animation request passed to [`SceneBuilder::play`].
///
/// Group targets expand into one action per member; scaling and growing a group use the group
/// center as the anchor.
#[derive(Clone, Debug, PartialEq)]
pub enum Animation {
    Single {
        target: Target,
        motion: Motion,
        ease: Option<Ease>,
    },
    /// Start and end together.
    Together(Vec<Animation>),
    /// Staggered start; see [`Lane`] for the timing rule.
    Lagged {
        lag_ratio: f64,
        items: Vec<Animation>,
    },
}

impl Animation {
    pub fn new(target: impl Into<Target>, motion: Motion) -> Self {
        Self::Single {
            target: target.into(),
            motion,
            ease: None,
        }
    }

    pub fn fade_in(target: impl Into<Target>) -> Self {
        Self::fade_in_shift(target, Vec2::ZERO)
    }

    pub fn fade_in_shift(target: impl Into<Target>, shift: Vec2) -> Self {
        Self::new(target, Motion::FadeIn { shift, scale: 1.0 })
    }

    pub fn fade_in_scale(target: impl Into<Target>, scale: f64) -> Self {
        Self::new(
            target,
            Motion::FadeIn {
                shift: Vec2::ZERO,
                scale,
            },
        )
    }

    pub fn fade_out(target: impl Into<Target>) -> Self {
        Self::new(target, Motion::FadeOut { shift: Vec2::ZERO })
    }

    pub fn grow(target: impl Into<Target>) -> Self {
        Self::new(target, Motion::GrowFromCenter)
    }

    pub fn grow_from_edge(target: impl Into<Target>, edge: Vec2) -> Self {
        Self::new(target, Motion::GrowFromEdge(edge))
    }

    pub fn grow_arrow(target: impl Into<Target>) -> Self {
        Self::new(target, Motion::GrowArrow)
    }

    pub fn create(target: impl Into<Target>) -> Self {
        Self::new(target, Motion::Create)
    }

    pub fn write(target: impl Into<Target>) -> Self {
        Self::new(target, Motion::Write)
    }

    pub fn move_to(target: impl Into<Target>, to: Point) -> Self {
        Self::new(target, Motion::MoveTo(to))
    }

    pub fn move_along(target: impl Into<Target>, path: Vec<Point>) -> Self {
        Self::new(target, Motion::MoveAlong(path))
    }

    pub fn shift(target: impl Into<Target>, by: Vec2) -> Self {
        Self::new(target, Motion::Shift(by))
    }

    pub fn scale(target: impl Into<Target>, factor: f64) -> Self {
        Self::new(target, Motion::Scale(factor))
    }

    pub fn set_fill(target: impl Into<Target>, color: Color, opacity: f64) -> Self {
        Self::new(target, Motion::SetFill(color, opacity))
    }

    pub fn set_stroke(target: impl Into<Target>, color: Color, width: f64) -> Self {
        Self::new(target, Motion::SetStroke(color, width))
    }

    pub fn set_color(target: impl Into<Target>, color: Color) -> Self {
        Self::new(target, Motion::SetColor(color))
    }

    pub fn restyle(target: impl Into<Target>, style: Style) -> Self {
        Self::new(target, Motion::Restyle(style))
    }

    pub fn together(items: impl IntoIterator<Item = Animation>) -> Self {
        Self::Together(items.into_iter().collect())
    }

    pub fn lagged(lag_ratio: f64, items: impl IntoIterator<Item = Animation>) -> Self {
        Self::Lagged {
            lag_ratio,
            items: items.into_iter().collect(),
        }
    }

    /// Override the rate function of this animation and everything nested in it.
    pub fn with_ease(self, ease: Ease) -> Self {
        match self {
            Self::Single { target, motion, .. } => Self::Single {
                target,
                motion,
                ease: Some(ease),
            },
            Self::Together(items) => {
                Self::Together(items.into_iter().map(|a| a.with_ease(ease)).collect())
            }
            Self::Lagged { lag_ratio, items } => Self::Lagged {
                lag_ratio,
                items: items.into_iter().map(|a| a.with_ease(ease)).collect(),
            },
        }
    }
}

/// Imperative scene authoring surface.
///
/// Element creation places things at the origin (or at given points); placement helpers move
/// them before they appear; `play`/`wait` append timeline steps. The builder tracks every
/// element's end-of-timeline state so later animations anchor on where things actually are.
///
/// Placement only applies to elements no step has animated yet. Once an element has been
/// played, move it with an animation instead.
pub struct SceneBuilder {
    name: String,
    background: Color,
    elements: Vec<Element>,
    groups: Vec<Group>,
    steps: Vec<Step>,
    pending: Vec<Action>,
    states: Vec<ElementState>,
    played: Vec<bool>,
}

impl SceneBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::BLACK,
            elements: Vec::new(),
            groups: Vec::new(),
            steps: Vec::new(),
            pending: Vec::new(),
            states: Vec::new(),
            played: Vec::new(),
        }
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn push(&mut self, geometry: Geometry, style: Style, position: Point) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        let element = Element {
            id,
            geometry,
            style,
            position,
        };
        self.states.push(ElementState::hidden(&element));
        self.played.push(false);
        self.elements.push(element);
        id
    }

    // ---- elements -------------------------------------------------------------------------

    pub fn circle(&mut self, radius: f64, style: Style) -> ElementId {
        self.push(Geometry::Circle { radius }, style, Point::ORIGIN)
    }

    /// Small filled circle at `center`.
    pub fn dot(&mut self, center: Point, radius: f64, color: Color) -> ElementId {
        self.push(
            Geometry::Circle { radius },
            Style::filled(color, 1.0),
            center,
        )
    }

    pub fn rect(&mut self, width: f64, height: f64, style: Style) -> ElementId {
        self.rounded_rect(width, height, 0.0, style)
    }

    pub fn rounded_rect(
        &mut self,
        width: f64,
        height: f64,
        corner_radius: f64,
        style: Style,
    ) -> ElementId {
        self.push(
            Geometry::Rect {
                width,
                height,
                corner_radius,
            },
            style,
            Point::ORIGIN,
        )
    }

    pub fn line(&mut self, start: Point, end: Point, style: Style) -> ElementId {
        let mid = start.midpoint(end);
        self.push(
            Geometry::Line {
                start: start - mid,
                end: end - mid,
            },
            style,
            mid,
        )
    }

    /// Arrow with the default end gap and tip proportions.
    pub fn arrow(&mut self, start: Point, end: Point, color: Color, stroke_width: f64) -> ElementId {
        self.arrow_with(
            start,
            end,
            Style::stroked(color, stroke_width).with_fill(color, 1.0),
            DEFAULT_ARROW_BUFF,
            DEFAULT_TIP_RATIO,
        )
    }

    /// Arrow trimmed by `buff` at both ends, with a tip no longer than `max_tip_ratio` of its
    /// length. A buff that would swallow the whole arrow is ignored.
    pub fn arrow_with(
        &mut self,
        start: Point,
        end: Point,
        style: Style,
        buff: f64,
        max_tip_ratio: f64,
    ) -> ElementId {
        let full = end - start;
        let len = full.hypot();
        let (start, end) = if len > 0.0 && 2.0 * buff < len {
            let dir = full / len;
            (start + dir * buff, end - dir * buff)
        } else {
            (start, end)
        };
        let len = start.distance(end);
        let tip_length = DEFAULT_TIP_LENGTH.min(max_tip_ratio * len);
        let mid = start.midpoint(end);
        self.push(
            Geometry::Arrow {
                start: start - mid,
                end: end - mid,
                tip_length,
            },
            style,
            mid,
        )
    }

    /// Open polyline through scene points.
    pub fn polyline(&mut self, points: &[Point], style: Style) -> ElementId {
        let center = arrange::union_all(points.iter().map(|p| Rect::from_points(*p, *p)))
            .map(|r| r.center())
            .unwrap_or(Point::ORIGIN);
        self.push(
            Geometry::Polyline {
                points: points.iter().map(|p| *p - center).collect(),
            },
            style,
            center,
        )
    }

    /// Graph of `f` over `[x_min, x_max]` in the coordinates of `axes`.
    pub fn curve(
        &mut self,
        axes: &Axes,
        f: impl Fn(f64) -> f64,
        x_min: f64,
        x_max: f64,
        style: Style,
    ) -> ElementId {
        let points = axes.plot(f, x_min, x_max, CURVE_SAMPLES);
        self.polyline(&points, style)
    }

    pub fn text(&mut self, content: impl Into<String>, font_size: f64, color: Color) -> ElementId {
        self.text_spaced(content, font_size, color, 1.0)
    }

    pub fn text_spaced(
        &mut self,
        content: impl Into<String>,
        font_size: f64,
        color: Color,
        line_spacing: f64,
    ) -> ElementId {
        self.push(
            Geometry::Text {
                content: content.into(),
                font_size,
                line_spacing,
            },
            Style::text(color),
            Point::ORIGIN,
        )
    }

    /// Axis lines with tips plus tick marks, as one group.
    pub fn axes(&mut self, axes: &Axes, color: Color) -> ExplainerResult<GroupId> {
        let style = Style::stroked(color, 2.0).with_fill(color, 1.0);
        let mut members = Vec::new();
        for (start, end) in axes.axis_lines() {
            let id = self.arrow_with(start, end, style.clone(), 0.0, 0.1);
            members.push(Target::Element(id));
        }
        for (start, end) in axes.ticks() {
            let id = self.line(start, end, Style::stroked(color, 2.0));
            members.push(Target::Element(id));
        }
        self.group(members)
    }

    /// Group existing elements and groups; nested groups are flattened.
    pub fn group(&mut self, members: impl IntoIterator<Item = Target>) -> ExplainerResult<GroupId> {
        let mut children = Vec::new();
        for member in members {
            children.extend(self.members(member)?);
        }
        let id = GroupId(self.groups.len() as u32);
        self.groups.push(Group { id, children });
        Ok(id)
    }

    // ---- queries --------------------------------------------------------------------------

    /// Elements addressed by a target.
    pub fn members(&self, target: impl Into<Target>) -> ExplainerResult<Vec<ElementId>> {
        match target.into() {
            Target::Element(id) => {
                if id.index() >= self.elements.len() {
                    return Err(ExplainerError::validation(format!(
                        "unknown element id {}",
                        id.0
                    )));
                }
                Ok(vec![id])
            }
            Target::Group(id) => self
                .groups
                .get(id.index())
                .map(|g| g.children.clone())
                .ok_or_else(|| ExplainerError::validation(format!("unknown group id {}", id.0))),
        }
    }

    pub fn element(&self, id: ElementId) -> ExplainerResult<&Element> {
        self.elements
            .get(id.index())
            .ok_or_else(|| ExplainerError::validation(format!("unknown element id {}", id.0)))
    }

    fn state(&self, id: ElementId) -> ExplainerResult<&ElementState> {
        self.states
            .get(id.index())
            .ok_or_else(|| ExplainerError::validation(format!("unknown element id {}", id.0)))
    }

    fn element_bounds(&self, id: ElementId) -> ExplainerResult<Rect> {
        let element = self.element(id)?;
        let state = self.state(id)?;
        Ok(element.geometry.scaled(state.scale).local_bounds() + state.position.to_vec2())
    }

    /// Current bounds of a target (after every animation queued so far).
    pub fn bounds(&self, target: impl Into<Target>) -> ExplainerResult<Rect> {
        let target = target.into();
        let mut rects = Vec::new();
        for id in self.members(target)? {
            rects.push(self.element_bounds(id)?);
        }
        arrange::union_all(rects)
            .ok_or_else(|| ExplainerError::validation(format!("{target:?} has no members")))
    }

    pub fn center(&self, target: impl Into<Target>) -> ExplainerResult<Point> {
        Ok(self.bounds(target)?.center())
    }

    /// Edge midpoint or corner of a target's bounds.
    pub fn edge(&self, target: impl Into<Target>, dir: Vec2) -> ExplainerResult<Point> {
        Ok(arrange::edge_point(self.bounds(target)?, dir))
    }

    /// Where the target's center would land after scaling by `scale` and pushing it to an edge.
    pub fn edge_target(
        &self,
        target: impl Into<Target>,
        dir: Vec2,
        buff: f64,
        scale: f64,
    ) -> ExplainerResult<Point> {
        let b = self.bounds(target)?;
        let c = b.center();
        let scaled = Rect::from_center_size(c, (b.width() * scale, b.height() * scale));
        Ok(c + arrange::to_edge(scaled, dir, buff))
    }

    /// Elements currently on screen, in creation order.
    pub fn on_screen(&self) -> Vec<ElementId> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.visible)
            .map(|(i, _)| ElementId(i as u32))
            .collect()
    }

    // ---- placement ------------------------------------------------------------------------

    /// Fails with a validation error when any member already appears in a step.
    fn placeable(&self, target: Target) -> ExplainerResult<Vec<ElementId>> {
        let members = self.members(target)?;
        if let Some(id) = members.iter().find(|id| self.played[id.index()]) {
            return Err(ExplainerError::validation(format!(
                "element {} was already played; animate it instead of placing it",
                id.0
            )));
        }
        Ok(members)
    }

    pub fn shift(&mut self, target: impl Into<Target>, by: Vec2) -> ExplainerResult<()> {
        for id in self.placeable(target.into())? {
            self.elements[id.index()].position += by;
            self.states[id.index()].position += by;
        }
        Ok(())
    }

    pub fn move_to(&mut self, target: impl Into<Target>, point: Point) -> ExplainerResult<()> {
        let target = target.into();
        let by = point - self.center(target)?;
        self.shift(target, by)
    }

    pub fn to_edge(
        &mut self,
        target: impl Into<Target>,
        dir: Vec2,
        buff: f64,
    ) -> ExplainerResult<()> {
        let target = target.into();
        let by = arrange::to_edge(self.bounds(target)?, dir, buff);
        self.shift(target, by)
    }

    /// `to_edge` with the default margin.
    pub fn to_edge_default(&mut self, target: impl Into<Target>, dir: Vec2) -> ExplainerResult<()> {
        self.to_edge(target, dir, DEFAULT_EDGE_BUFF)
    }

    pub fn next_to(
        &mut self,
        target: impl Into<Target>,
        anchor: impl Into<Target>,
        dir: Vec2,
        buff: f64,
    ) -> ExplainerResult<()> {
        self.next_to_aligned(target, anchor, dir, buff, Vec2::ZERO)
    }

    /// `next_to` with the default gap.
    pub fn next_to_default(
        &mut self,
        target: impl Into<Target>,
        anchor: impl Into<Target>,
        dir: Vec2,
    ) -> ExplainerResult<()> {
        self.next_to(target, anchor, dir, DEFAULT_BUFF)
    }

    pub fn next_to_aligned(
        &mut self,
        target: impl Into<Target>,
        anchor: impl Into<Target>,
        dir: Vec2,
        buff: f64,
        aligned_edge: Vec2,
    ) -> ExplainerResult<()> {
        let target = target.into();
        let anchor = self.bounds(anchor)?;
        let by = arrange::next_to(self.bounds(target)?, anchor, dir, buff, aligned_edge);
        self.shift(target, by)
    }

    pub fn next_to_point(
        &mut self,
        target: impl Into<Target>,
        point: Point,
        dir: Vec2,
        buff: f64,
    ) -> ExplainerResult<()> {
        let target = target.into();
        let anchor = Rect::from_points(point, point);
        let by = arrange::next_to(self.bounds(target)?, anchor, dir, buff, Vec2::ZERO);
        self.shift(target, by)
    }

    pub fn align_to(
        &mut self,
        target: impl Into<Target>,
        anchor: impl Into<Target>,
        dir: Vec2,
    ) -> ExplainerResult<()> {
        let target = target.into();
        let anchor = self.bounds(anchor)?;
        let by = arrange::align_to(self.bounds(target)?, anchor, dir);
        self.shift(target, by)
    }

    /// Chain targets in `dir` with `buff` gaps, centering the run on the origin.
    pub fn arrange(
        &mut self,
        targets: &[Target],
        dir: Vec2,
        buff: f64,
        aligned_edge: Vec2,
    ) -> ExplainerResult<()> {
        let rects = targets
            .iter()
            .map(|t| self.bounds(*t))
            .collect::<ExplainerResult<Vec<_>>>()?;
        for target in targets {
            self.placeable(*target)?;
        }
        let shifts = arrange::arrange(&rects, dir, buff, aligned_edge);
        for (target, by) in targets.iter().zip(shifts) {
            self.shift(*target, by)?;
        }
        Ok(())
    }

    /// Resize a target about its center (geometry only, stroke widths are kept).
    pub fn scale(&mut self, target: impl Into<Target>, factor: f64) -> ExplainerResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ExplainerError::validation(format!(
                "scale factor must be > 0, got {factor}"
            )));
        }
        let target = target.into();
        let c = self.center(target)?;
        for id in self.placeable(target)? {
            let el = &mut self.elements[id.index()];
            el.geometry = el.geometry.scaled(factor);
            el.position = c + (el.position - c) * factor;
            self.states[id.index()].position = el.position;
        }
        Ok(())
    }

    // ---- timeline -------------------------------------------------------------------------

    /// Put a target on screen without animation; takes effect at the start of the next step.
    pub fn add(&mut self, target: impl Into<Target>) -> ExplainerResult<()> {
        for id in self.members(target)? {
            self.pending.push(Action {
                target: id,
                effect: Effect::Add,
                ease: Ease::Linear,
                window: INSTANT,
            });
            self.states[id.index()].visible = true;
        }
        Ok(())
    }

    pub fn play(&mut self, animations: impl IntoIterator<Item = Animation>) -> ExplainerResult<()> {
        self.play_for(DEFAULT_RUN_TIME, animations)
    }

    pub fn play_for(
        &mut self,
        run_time: f64,
        animations: impl IntoIterator<Item = Animation>,
    ) -> ExplainerResult<()> {
        check_run_time(run_time)?;
        let mut lanes = Vec::new();
        for animation in animations {
            lanes.push(self.lane(&animation)?);
        }
        if lanes.iter().all(|l| l.slots.is_empty()) {
            return Err(ExplainerError::animation(format!(
                "step {} plays no animations",
                self.steps.len()
            )));
        }
        self.push_step(Step { run_time, lanes });
        Ok(())
    }

    pub fn wait(&mut self, secs: f64) -> ExplainerResult<()> {
        check_run_time(secs)?;
        self.push_step(Step::wait(secs));
        Ok(())
    }

    /// Fade out everything currently on screen.
    pub fn fade_out_all(&mut self) -> ExplainerResult<()> {
        let visible = self.on_screen();
        if visible.is_empty() {
            return Ok(());
        }
        self.play(visible.into_iter().map(Animation::fade_out))
    }

    fn push_step(&mut self, mut step: Step) {
        if !self.pending.is_empty() {
            step.lanes
                .insert(0, Lane::together(std::mem::take(&mut self.pending)));
        }
        let start = self.states.clone();
        apply_step(&step, &start, 1.0, &mut self.states);
        for (action, _) in step.windowed_actions() {
            if let Some(played) = self.played.get_mut(action.target.index()) {
                *played = true;
            }
        }
        self.steps.push(step);
    }

    fn lane(&self, animation: &Animation) -> ExplainerResult<Lane> {
        match animation {
            Animation::Lagged { lag_ratio, items } => {
                let slots = items
                    .iter()
                    .map(|item| self.actions(item).map(|actions| Slot { actions }))
                    .collect::<ExplainerResult<Vec<_>>>()?;
                Ok(Lane {
                    lag_ratio: *lag_ratio,
                    slots,
                })
            }
            other => Ok(Lane::together(self.actions(other)?)),
        }
    }

    /// Flatten an animation into actions; nested staggers become sub-windows of the slot.
    fn actions(&self, animation: &Animation) -> ExplainerResult<Vec<Action>> {
        match animation {
            Animation::Single {
                target,
                motion,
                ease,
            } => self.resolve(*target, motion, *ease),
            Animation::Together(items) => {
                let mut out = Vec::new();
                for item in items {
                    out.extend(self.actions(item)?);
                }
                Ok(out)
            }
            Animation::Lagged { lag_ratio, items } => {
                check_lag_ratio(*lag_ratio)?;
                let mut out = Vec::new();
                for (i, item) in items.iter().enumerate() {
                    let window = stagger_window(items.len(), *lag_ratio, i);
                    for mut action in self.actions(item)? {
                        action.window = compose_window(window, action.window);
                        out.push(action);
                    }
                }
                Ok(out)
            }
        }
    }

    fn resolve(
        &self,
        target: Target,
        motion: &Motion,
        ease: Option<Ease>,
    ) -> ExplainerResult<Vec<Action>> {
        let is_group = matches!(target, Target::Group(_));
        let bounds = self.bounds(target)?;
        let c = bounds.center();
        let anchor = is_group.then_some(c);
        let ease = ease.unwrap_or_else(|| motion.default_ease());

        let mut out = Vec::new();
        for id in self.members(target)? {
            let state = self.state(id)?;
            let effect = match motion {
                Motion::FadeIn { shift, scale } => Effect::FadeIn {
                    shift: *shift,
                    scale: *scale,
                },
                Motion::FadeOut { shift } => Effect::FadeOut { shift: *shift },
                Motion::GrowFromCenter => Effect::Grow { about: anchor },
                Motion::GrowFromEdge(edge) => Effect::Grow {
                    about: Some(arrange::edge_point(bounds, *edge)),
                },
                Motion::GrowArrow => {
                    let about = match &self.element(id)?.geometry {
                        Geometry::Arrow { start, .. } | Geometry::Line { start, .. } => {
                            state.position + *start * state.scale
                        }
                        _ => c,
                    };
                    Effect::Grow { about: Some(about) }
                }
                Motion::Create => Effect::Create,
                Motion::Write => Effect::Write,
                Motion::MoveTo(to) => Effect::MoveTo {
                    to: state.position + (*to - c),
                },
                Motion::MoveAlong(path) => {
                    let offset = state.position - c;
                    Effect::MoveAlong {
                        path: path.iter().map(|p| *p + offset).collect(),
                    }
                }
                Motion::Shift(by) => Effect::Shift { by: *by },
                Motion::Scale(factor) => Effect::Scale {
                    factor: *factor,
                    about: anchor,
                },
                Motion::SetFill(color, opacity) => Effect::SetFill {
                    color: *color,
                    opacity: *opacity,
                },
                Motion::SetStroke(color, width) => Effect::SetStroke {
                    color: *color,
                    width: *width,
                },
                Motion::SetColor(color) => Effect::SetColor { color: *color },
                Motion::Restyle(style) => Effect::Restyle {
                    style: style.clone(),
                },
                Motion::Remove => Effect::Remove,
            };
            out.push(Action {
                target: id,
                effect,
                ease,
                window: FULL_WINDOW,
            });
        }
        Ok(out)
    }

    /// Finish the scene. Fails on invalid timing, unknown ids or an `add` with no step after it.
    pub fn build(self) -> ExplainerResult<Scene> {
        if !self.pending.is_empty() {
            return Err(ExplainerError::animation(
                "add() must be followed by a play() or wait()",
            ));
        }
        let scene = Scene {
            name: self.name,
            background: self.background,
            elements: self.elements,
            groups: self.groups,
            timeline: Timeline { steps: self.steps },
        };
        scene.validate()?;
        tracing::debug!(
            scene = %scene.name,
            elements = scene.elements.len(),
            steps = scene.timeline.steps.len(),
            duration = scene.duration(),
            "scene built"
        );
        Ok(scene)
    }
}

fn check_lag_ratio(lag_ratio: f64) -> ExplainerResult<()> {
    if !lag_ratio.is_finite() || lag_ratio < 0.0 {
        return Err(ExplainerError::animation(format!(
            "lag_ratio must be finite and >= 0, got {lag_ratio}"
        )));
    }
    Ok(())
}

fn check_run_time(run_time: f64) -> ExplainerResult<()> {
    if !run_time.is_finite() || run_time <= 0.0 {
        return Err(ExplainerError::animation(format!(
            "run_time must be finite and > 0, got {run_time}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
