//! Scenes explaining how an autonomous coding agent compounds its work night after night.

use crate::{
    foundation::{
        color::Color,
        core::{DOWN, LEFT, ORIGIN, Point, RIGHT, UP, UR, Vec2},
        error::ExplainerResult,
    },
    layout::radial::circular_at_angles,
    scene::{
        dsl::{Animation, DEFAULT_ARROW_BUFF, SceneBuilder},
        model::{ElementId, GroupId, Scene, Style, Target},
    },
    scenes::palette::{
        ACCENT, BACKGROUND, CODE, FILE_BG, PRIMARY, SECONDARY, SUCCESS, TEXT, WARNING,
    },
};

/// Radius of the loop in [`compound_loop`].
pub const LOOP_RADIUS: f64 = 2.2;
/// Node angles of the loop, in degrees; every step is 72° clockwise.
pub const LOOP_ANGLES: [f64; 5] = [90.0, 18.0, -54.0, -126.0, -198.0];
/// Gap between a loop arrow and the node centers it joins.
pub const LOOP_ARROW_INSET: f64 = 0.95;

const LOOP_NODES: [(&str, &str); 5] = [
    ("📋 Report", "Your priorities"),
    ("📝 PRD", "Requirements doc"),
    ("✅ Tasks", "User stories"),
    ("💻 Implement", "Code changes"),
    ("🔀 PR", "Pull request"),
];

const SMALL_TASKS: [(&str, &str); 3] = [
    ("1. Add Related Concepts", "Links to /concepts/ pages"),
    ("2. Add Go Deeper sections", "Optional reading links"),
    ("3. Enhance Path Complete", "Summary + verification"),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Learning {
    Pattern,
    Gotcha,
}

const DAYS: [(&str, &str, Learning); 5] = [
    ("Day 1", "Pattern: Use h3 for subsections", Learning::Pattern),
    ("Day 2", "Gotcha: Mermaid needs code blocks", Learning::Gotcha),
    ("Day 3", "Pattern: Progressive disclosure", Learning::Pattern),
    ("Day 4", "Gotcha: Build before commit", Learning::Gotcha),
    ("Day 5", "Pattern: Consistent link format", Learning::Pattern),
];

const NEW_PATTERNS: [&str; 3] = [
    "• h3 for subsections",
    "• Progressive disclosure",
    "• Consistent link format",
];

const NEW_GOTCHAS: [&str; 2] = ["• Mermaid needs code blocks", "• Build before commit"];

/// Stroke width of a default arrow.
const ARROW_STROKE: f64 = 6.0;

fn heading(b: &mut SceneBuilder, content: &str) -> ExplainerResult<ElementId> {
    let title = b.text(content, 40.0, TEXT);
    b.to_edge(title, UP, 0.5)?;
    Ok(title)
}

fn targets(ids: &[ElementId]) -> Vec<Target> {
    ids.iter().map(|id| Target::from(*id)).collect()
}

fn accent_arrow(b: &mut SceneBuilder, start: Point, end: Point, width: f64) -> ElementId {
    b.arrow(start, end, ACCENT, width)
}

/// Report → PRD → Tasks → Implement → PR, drawn as a loop with a token running around it.
pub fn compound_loop() -> ExplainerResult<Scene> {
    let mut b = SceneBuilder::new("CompoundLoopScene");
    b.set_background(BACKGROUND);

    let title = heading(&mut b, "The Compound Engineering Loop")?;
    b.play([Animation::write(title)])?;
    b.wait(0.5)?;

    let positions = circular_at_angles(&LOOP_ANGLES, LOOP_RADIUS, ORIGIN)?;
    let node_style = Style::filled(PRIMARY, 0.8).with_stroke(SECONDARY, 2.0);
    let mut nodes = Vec::with_capacity(LOOP_NODES.len());
    let mut appear = Vec::with_capacity(LOOP_NODES.len());
    for ((label, sublabel), pos) in LOOP_NODES.iter().zip(&positions) {
        let node = b.rounded_rect(1.8, 0.9, 0.2, node_style.clone());
        b.move_to(node, *pos)?;
        let label = b.text(*label, 20.0, Color::WHITE);
        b.move_to(label, *pos + UP * 0.1)?;
        let sublabel = b.text(*sublabel, 12.0, TEXT);
        b.move_to(sublabel, *pos + DOWN * 0.25)?;

        nodes.push(node);
        appear.push(Animation::together([
            Animation::grow(node),
            Animation::fade_in(label),
            Animation::fade_in(sublabel),
        ]));
    }
    b.play_for(2.5, [Animation::lagged(0.2, appear)])?;

    let arrow_style = Style::stroked(ACCENT, 3.0).with_fill(ACCENT, 1.0);
    let mut arrows = Vec::with_capacity(positions.len());
    for (i, start) in positions.iter().enumerate() {
        let end = positions[(i + 1) % positions.len()];
        let dir = (end - *start).normalize();
        let arrow = b.arrow_with(
            *start + dir * LOOP_ARROW_INSET,
            end - dir * LOOP_ARROW_INSET,
            arrow_style.clone(),
            0.0,
            0.15,
        );
        arrows.push(Animation::grow_arrow(arrow));
    }
    b.play_for(1.5, [Animation::lagged(0.15, arrows)])?;

    let token = b.dot(positions[0], 0.15, WARNING);
    b.play([Animation::fade_in_scale(token, 0.5)])?;

    for _ in 0..2 {
        for (i, node) in nodes.iter().enumerate() {
            let next = positions[(i + 1) % positions.len()];
            b.play_for(0.2, [Animation::set_fill(*node, ACCENT, 0.9)])?;
            b.play_for(
                0.4,
                [
                    Animation::move_to(token, next),
                    Animation::set_fill(*node, PRIMARY, 0.8),
                ],
            )?;
        }
    }
    b.play([Animation::fade_out(token)])?;

    let repeat = b.text("↻ Repeats Every Night", 24.0, ACCENT);
    b.next_to_point(repeat, ORIGIN, DOWN, 0.3)?;
    b.play([Animation::write(repeat)])?;
    b.wait(2.0)?;
    b.build()
}

/// Rounded card with a title and a one-line description.
fn task_card(b: &mut SceneBuilder, title: &str, desc: &str) -> ExplainerResult<(GroupId, ElementId)> {
    let rect = b.rounded_rect(
        3.5,
        0.9,
        0.15,
        Style::filled(PRIMARY, 0.8).with_stroke(SECONDARY, 2.0),
    );
    let title = b.text(title, 14.0, Color::WHITE);
    b.move_to(title, Point::ORIGIN + UP * 0.15)?;
    let desc = b.text(desc, 10.0, TEXT);
    b.move_to(desc, Point::ORIGIN + DOWN * 0.2)?;
    let card = b.group(targets(&[rect, title, desc]))?;
    Ok((card, rect))
}

/// One big priority broken into three small, checkable tasks.
pub fn task_decomposition() -> ExplainerResult<Scene> {
    let mut b = SceneBuilder::new("TaskDecompositionScene");
    b.set_background(BACKGROUND);

    let title = heading(&mut b, "Task Decomposition")?;
    b.play([Animation::write(title)])?;

    let big_rect = b.rounded_rect(
        6.0,
        1.2,
        0.2,
        Style::filled(WARNING, 0.8).with_stroke(Color::WHITE, 2.0),
    );
    let big_text = b.text("Add cross-references to learning path", 18.0, Color::WHITE);
    let big_task = b.group(targets(&[big_rect, big_text]))?;
    b.move_to(big_task, Point::ORIGIN + UP * 1.5)?;
    b.play([Animation::grow(big_task)])?;
    b.wait(0.5)?;

    let bottom = b.edge(big_task, DOWN)?;
    let arrow_down = accent_arrow(&mut b, bottom + DOWN * 0.2, bottom + DOWN * 1.0, 3.0);
    let agent_label = b.text("Agent analyzes & breaks down", 14.0, TEXT);
    b.next_to(agent_label, arrow_down, RIGHT, 0.3)?;
    b.play([
        Animation::grow_arrow(arrow_down),
        Animation::fade_in(agent_label),
    ])?;

    let mut cards = Vec::with_capacity(SMALL_TASKS.len());
    let mut rects = Vec::with_capacity(SMALL_TASKS.len());
    for (title, desc) in SMALL_TASKS {
        let (card, rect) = task_card(&mut b, title, desc)?;
        cards.push(Target::from(card));
        rects.push(rect);
    }
    b.arrange(&cards, RIGHT, 0.3, Vec2::ZERO)?;
    let row = b.group(cards.clone())?;
    b.move_to(row, Point::ORIGIN + DOWN * 1.2)?;
    b.play_for(
        1.5,
        [Animation::lagged(0.2, cards.iter().map(|c| Animation::grow(*c)))],
    )?;

    let mut checks = Vec::with_capacity(rects.len());
    for rect in &rects {
        let check = b.text("✓", 28.0, SUCCESS);
        let corner = b.edge(*rect, UR)?;
        b.move_to(check, corner + LEFT * 0.3 + DOWN * 0.2)?;
        checks.push(check);
    }

    b.wait(0.5)?;
    for (check, rect) in checks.iter().zip(&rects) {
        b.play_for(
            0.4,
            [
                Animation::fade_in_scale(*check, 2.0),
                Animation::set_stroke(*rect, SUCCESS, 3.0),
            ],
        )?;
        b.wait(0.3)?;
    }

    let message = b.text(
        "Each task: Small, testable, independently completable",
        18.0,
        ACCENT,
    );
    b.to_edge(message, DOWN, 0.8)?;
    b.play([Animation::write(message)])?;
    b.wait(2.0)?;
    b.build()
}

/// The agent's memory file filling up with patterns and gotchas over five days.
pub fn knowledge_compounding() -> ExplainerResult<Scene> {
    let mut b = SceneBuilder::new("KnowledgeCompoundingScene");
    b.set_background(BACKGROUND);

    let title = heading(&mut b, "Knowledge Compounding")?;
    b.play([Animation::write(title)])?;

    let file_rect = b.rounded_rect(
        4.0,
        5.0,
        0.1,
        Style::filled(FILE_BG, 1.0).with_stroke(CODE, 2.0),
    );
    let file_name = b.text("CLAUDE.md", 16.0, CODE);
    let top = b.edge(file_rect, UP)?;
    b.move_to(file_name, top + DOWN * 0.3)?;
    let file_box = b.group(targets(&[file_rect, file_name]))?;
    b.move_to(file_box, Point::ORIGIN + LEFT * 3.0)?;
    b.play([Animation::grow(file_box)])?;

    let lines: [(&str, f64, Color); 8] = [
        ("## Project Overview", 12.0, Color::WHITE),
        ("Tech stack, structure...", 10.0, Color::GRAY),
        ("", 10.0, Color::WHITE),
        ("## Patterns Discovered", 12.0, Color::WHITE),
        ("(empty)", 10.0, Color::GRAY),
        ("", 10.0, Color::WHITE),
        ("## Gotchas", 12.0, Color::WHITE),
        ("(empty)", 10.0, Color::GRAY),
    ];
    let content: Vec<ElementId> = lines
        .iter()
        .map(|(text, size, color)| b.text(*text, *size, *color))
        .collect();
    b.arrange(&targets(&content), DOWN, 0.1, LEFT)?;
    let initial = b.group(targets(&content))?;
    let file_center = b.center(file_rect)?;
    b.move_to(initial, file_center + DOWN * 0.3)?;
    b.scale(initial, 0.9)?;
    b.play([Animation::fade_in(initial)])?;

    let time_title = b.text("Time →", 14.0, TEXT);
    b.move_to(time_title, Point::new(2.0, 2.0))?;
    b.play([Animation::write(time_title)])?;

    let mut days = Vec::with_capacity(DAYS.len());
    for (day, learning, _) in DAYS {
        let dot = b.dot(Point::ORIGIN, 0.1, ACCENT);
        let day_label = b.text(day, 12.0, Color::WHITE);
        b.next_to(day_label, dot, RIGHT, 0.15)?;
        let learning = b.text(learning, 10.0, TEXT);
        b.next_to_aligned(learning, day_label, DOWN, 0.05, LEFT)?;
        days.push(Target::from(b.group(targets(&[dot, day_label, learning]))?));
    }
    b.arrange(&days, DOWN, 0.3, LEFT)?;
    let day_column = b.group(days.clone())?;
    b.move_to(day_column, Point::new(2.5, -0.3))?;

    let arrow_style = Style::stroked(ACCENT, 2.0).with_fill(ACCENT, 1.0);
    let mut last_pattern = content[4];
    let mut last_gotcha = content[7];
    let mut patterns = NEW_PATTERNS.iter();
    let mut gotchas = NEW_GOTCHAS.iter();

    for (day, (_, _, kind)) in days.iter().zip(DAYS) {
        b.play_for(0.4, [Animation::fade_in_shift(*day, LEFT * 0.3)])?;

        let from = b.edge(*day, LEFT)? + LEFT * 0.2;
        let to = b.edge(file_rect, RIGHT)? + RIGHT * 0.1;
        let arrow = b.arrow_with(from, to, arrow_style.clone(), DEFAULT_ARROW_BUFF, 0.1);
        b.play_for(0.3, [Animation::grow_arrow(arrow)])?;

        let (pending, color, anchor) = match kind {
            Learning::Pattern => (&mut patterns, ACCENT, &mut last_pattern),
            Learning::Gotcha => (&mut gotchas, WARNING, &mut last_gotcha),
        };
        if let Some(text) = pending.next() {
            let bullet = b.text(*text, 9.0, color);
            b.next_to_aligned(bullet, *anchor, DOWN, 0.05, LEFT)?;
            *anchor = bullet;
            b.play_for(0.3, [Animation::fade_in_shift(bullet, UP * 0.1)])?;
        }

        b.play_for(0.2, [Animation::fade_out(arrow)])?;
    }

    let first = b.text("Agent gets smarter", 20.0, SUCCESS);
    let second = b.text("every single day", 20.0, SUCCESS);
    b.arrange(&targets(&[first, second]), DOWN, 0.1, Vec2::ZERO)?;
    let message = b.group(targets(&[first, second]))?;
    b.to_edge(message, DOWN, 0.6)?;
    b.play([Animation::write(message)])?;
    b.wait(2.0)?;
    b.build()
}

/// Rounded phase card: heading near the top, bullet list below it.
fn phase_card(
    b: &mut SceneBuilder,
    height: f64,
    fill: Color,
    heading: &str,
    items: &[&str],
    item_buff: f64,
    content_drop: f64,
) -> ExplainerResult<GroupId> {
    let rect = b.rounded_rect(
        2.8,
        height,
        0.15,
        Style::filled(fill, 0.7).with_stroke(Color::WHITE, 2.0),
    );
    let head = b.text(heading, 18.0, Color::WHITE);
    let top = b.edge(rect, UP)?;
    b.move_to(head, top + DOWN * 0.35)?;

    let lines: Vec<ElementId> = items.iter().map(|t| b.text(*t, 11.0, TEXT)).collect();
    b.arrange(&targets(&lines), DOWN, item_buff, LEFT)?;
    let list = b.group(targets(&lines))?;
    b.move_to(list, Point::ORIGIN + DOWN * content_drop)?;

    let mut members = targets(&[rect, head]);
    members.push(list.into());
    b.group(members)
}

/// Evening review, overnight implementation, morning result.
pub fn nightly_workflow() -> ExplainerResult<Scene> {
    let mut b = SceneBuilder::new("NightlyWorkflowScene");
    b.set_background(BACKGROUND);

    let title = heading(&mut b, "The Nightly Workflow")?;
    b.play([Animation::write(title)])?;

    let timeline = b.line(
        Point::ORIGIN + LEFT * 5.0,
        Point::ORIGIN + RIGHT * 5.0,
        Style::stroked(TEXT, 2.0),
    );
    b.play([Animation::create(timeline)])?;

    let times = [(-4.0, "10:30 PM"), (-1.0, "11:00 PM"), (2.5, "Morning")];
    let mut markers = Vec::with_capacity(times.len());
    for (x, label) in times {
        let tick = b.line(
            Point::new(x, 0.15),
            Point::new(x, -0.15),
            Style::stroked(Color::WHITE, 2.0),
        );
        let label = b.text(label, 14.0, TEXT);
        b.next_to(label, tick, DOWN, 0.1)?;
        markers.push(b.group(targets(&[tick, label]))?);
    }
    b.play([Animation::lagged(
        0.2,
        markers.iter().map(|m| Animation::fade_in(*m)),
    )])?;

    let review = phase_card(
        &mut b,
        2.0,
        SECONDARY,
        "🔍 Review",
        &["• Read git log", "• Extract learnings", "• Update CLAUDE.md"],
        0.1,
        0.2,
    )?;
    b.move_to(review, Point::new(-4.0, 1.8))?;
    b.play([Animation::grow(review)])?;

    let from = b.edge(review, RIGHT)? + RIGHT * 0.1;
    let arrow1 = accent_arrow(&mut b, from, Point::new(-2.4, 1.8), 3.0);
    b.play([Animation::grow_arrow(arrow1)])?;

    let implement = phase_card(
        &mut b,
        2.4,
        PRIMARY,
        "🚀 Implement",
        &[
            "• Read report",
            "• Create PRD",
            "• Execute tasks",
            "• Create PR",
        ],
        0.08,
        0.15,
    )?;
    b.move_to(implement, Point::new(-1.0, 1.8))?;
    b.play([Animation::grow(implement)])?;

    let from = b.edge(implement, RIGHT)? + RIGHT * 0.1;
    let arrow2 = accent_arrow(&mut b, from, Point::new(1.3, 1.8), 3.0);
    b.play([Animation::grow_arrow(arrow2)])?;

    let wake = phase_card(
        &mut b,
        1.8,
        SUCCESS,
        "☀️ You Wake Up",
        &["• PR ready to review", "• Smarter CLAUDE.md"],
        0.1,
        0.15,
    )?;
    b.move_to(wake, Point::new(2.5, 1.8))?;
    b.play([Animation::grow(wake)])?;

    let message = b.text(
        "Order matters: Review updates CLAUDE.md → Implementation benefits from learnings",
        14.0,
        ACCENT,
    );
    b.to_edge(message, DOWN, 0.6)?;
    b.play([Animation::write(message)])?;
    b.wait(2.0)?;
    b.build()
}

/// Bold heading with a smaller caption stacked under it, centered on `at`.
fn caption_pair(b: &mut SceneBuilder, head: &str, sub: &str, at: Point) -> ExplainerResult<GroupId> {
    let head = b.text(head, 20.0, Color::WHITE);
    let sub = b.text(sub, 14.0, TEXT);
    b.arrange(&targets(&[head, sub]), DOWN, 0.1, Vec2::ZERO)?;
    let pair = b.group(targets(&[head, sub]))?;
    b.move_to(pair, at)?;
    Ok(pair)
}

/// The complete walkthrough: the problem, the nightly loop, the key insight.
pub fn full_explainer() -> ExplainerResult<Scene> {
    let mut b = SceneBuilder::new("FullExplainerScene");
    b.set_background(BACKGROUND);

    // Opening.
    let title = b.text("Autonomous Coding Agents", 48.0, Color::WHITE);
    let subtitle = b.text("How AI ships code while you sleep", 24.0, ACCENT);
    b.next_to(subtitle, title, DOWN, 0.3)?;
    b.play_for(1.5, [Animation::write(title)])?;
    b.play([Animation::fade_in_shift(subtitle, UP * 0.2)])?;
    b.wait(1.0)?;
    b.play([Animation::fade_out(title), Animation::fade_out(subtitle)])?;

    // The traditional workflow.
    let problem_title = b.text("The Traditional Workflow", 32.0, TEXT);
    b.to_edge(problem_title, UP, 0.8)?;
    b.play([Animation::write(problem_title)])?;

    let head = b.circle(0.3, Style::stroked(WARNING, 4.0).with_fill(WARNING, 0.8));
    let face = b.text("👨‍💻", 36.0, Color::WHITE);
    let human = b.group(targets(&[head, face]))?;
    b.move_to(human, Point::ORIGIN + LEFT * 2.0)?;

    let work_arrow = b.arrow(Point::ORIGIN + LEFT, Point::ORIGIN + RIGHT, Color::WHITE, 2.0);

    let code_rect = b.rounded_rect(
        1.5,
        1.0,
        0.1,
        Style::filled(CODE, 0.8).with_stroke(Color::WHITE, 4.0),
    );
    let braces = b.text("{ }", 24.0, Color::WHITE);
    let code = b.group(targets(&[code_rect, braces]))?;
    b.move_to(code, Point::ORIGIN + RIGHT * 2.0)?;

    b.play([
        Animation::fade_in(human),
        Animation::grow_arrow(work_arrow),
        Animation::fade_in(code),
    ])?;

    let work_hours = b.text("Only during work hours", 18.0, WARNING);
    b.next_to(work_hours, work_arrow, DOWN, 0.3)?;
    b.play([Animation::write(work_hours)])?;
    b.wait(1.0)?;

    let night = b.text("🌙 Night = No progress", 20.0, Color::GRAY);
    b.to_edge(night, DOWN, 1.0)?;
    b.play([Animation::write(night)])?;
    b.wait(1.0)?;
    b.play([
        Animation::fade_out(problem_title),
        Animation::fade_out(human),
        Animation::fade_out(work_arrow),
        Animation::fade_out(code),
        Animation::fade_out(work_hours),
        Animation::fade_out(night),
    ])?;

    // The compound engineering way.
    let solution_title = b.text("The Compound Engineering Way", 32.0, ACCENT);
    b.to_edge(solution_title, UP, 0.8)?;
    b.play([Animation::write(solution_title)])?;

    let day = caption_pair(
        &mut b,
        "☀️ Day",
        "You work + Agent learns",
        Point::ORIGIN + LEFT * 3.0,
    )?;
    let overnight = caption_pair(&mut b, "🌙 Night", "Agent implements priorities", ORIGIN)?;
    let morning = caption_pair(
        &mut b,
        "☀️ Morning",
        "PR ready + smarter agent",
        Point::ORIGIN + RIGHT * 3.0,
    )?;

    let (a, c) = (b.edge(day, RIGHT)?, b.edge(overnight, LEFT)?);
    let arrow1 = accent_arrow(&mut b, a, c, ARROW_STROKE);
    let (a, c) = (b.edge(overnight, RIGHT)?, b.edge(morning, LEFT)?);
    let arrow2 = accent_arrow(&mut b, a, c, ARROW_STROKE);

    b.play([
        Animation::fade_in(day),
        Animation::fade_in(overnight),
        Animation::fade_in(morning),
        Animation::grow_arrow(arrow1),
        Animation::grow_arrow(arrow2),
    ])?;

    let progress = b.text("✨ Progress 24/7 ✨", 24.0, SUCCESS);
    b.to_edge(progress, DOWN, 1.0)?;
    b.play([Animation::write(progress)])?;
    b.wait(1.5)?;
    b.play([
        Animation::fade_out(solution_title),
        Animation::fade_out(day),
        Animation::fade_out(overnight),
        Animation::fade_out(morning),
        Animation::fade_out(arrow1),
        Animation::fade_out(arrow2),
        Animation::fade_out(progress),
    ])?;

    // Key insight.
    let insight_title = b.text("The Key Insight", 36.0, Color::WHITE);
    b.move_to(insight_title, Point::ORIGIN + UP * 2.0)?;
    let insight = b.text_spaced(
        "Each unit of work should make\nsubsequent work easier",
        24.0,
        ACCENT,
        1.5,
    );
    b.play([Animation::write(insight_title)])?;
    b.play_for(2.0, [Animation::write(insight)])?;

    let compound: Vec<ElementId> = [
        ("Day 1: Agent learns patterns", TEXT),
        ("Day 2: Agent avoids past mistakes", TEXT),
        ("Day 3: Agent follows conventions", TEXT),
        ("Day N: Agent knows your codebase", SUCCESS),
    ]
    .into_iter()
    .map(|(text, color)| b.text(text, 16.0, color))
    .collect();
    b.arrange(&targets(&compound), DOWN, 0.2, LEFT)?;
    let list = b.group(targets(&compound))?;
    b.move_to(list, Point::ORIGIN + DOWN * 1.5)?;
    b.play_for(
        2.0,
        [Animation::lagged(
            0.3,
            compound
                .iter()
                .map(|line| Animation::fade_in_shift(*line, RIGHT * 0.3)),
        )],
    )?;
    b.wait(2.0)?;

    // Closing.
    b.fade_out_all()?;
    let stop = b.text("Stop Prompting.", 36.0, Color::WHITE);
    let start = b.text("Start Compounding.", 36.0, ACCENT);
    b.arrange(&targets(&[stop, start]), DOWN, 0.3, Vec2::ZERO)?;
    let closing = b.group(targets(&[stop, start]))?;
    b.play_for(2.0, [Animation::write(closing)])?;
    b.wait(2.0)?;
    b.build()
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/agent.rs"]
mod tests;
