use float_cmp::approx_eq;

use super::*;
use crate::{eval::evaluator::Evaluator, scene::model::Geometry};

fn rounded_rects(scene: &Scene) -> Vec<&crate::scene::model::Element> {
    scene
        .elements
        .iter()
        .filter(|e| matches!(e.geometry, Geometry::Rect { .. }))
        .collect()
}

#[test]
fn loop_nodes_sit_on_the_circle() {
    let scene = compound_loop().unwrap();
    let nodes = rounded_rects(&scene);
    assert_eq!(nodes.len(), 5);
    for node in nodes {
        assert!(approx_eq!(
            f64,
            node.position.distance(Point::ORIGIN),
            LOOP_RADIUS,
            epsilon = 1e-9
        ));
    }
    assert!(approx_eq!(f64, scene.duration(), 16.5, epsilon = 1e-9));
}

#[test]
fn loop_arrows_are_inset_from_node_centers() {
    let scene = compound_loop().unwrap();
    let arrows: Vec<_> = scene
        .elements
        .iter()
        .filter_map(|e| match e.geometry {
            Geometry::Arrow { start, end, .. } => Some((e.position + start, e.position + end)),
            _ => None,
        })
        .collect();
    assert_eq!(arrows.len(), 5);
    let side = 2.0 * LOOP_RADIUS * 36f64.to_radians().sin();
    for (start, end) in arrows {
        assert!(approx_eq!(
            f64,
            start.distance(end),
            side - 2.0 * LOOP_ARROW_INSET,
            epsilon = 1e-9
        ));
    }
}

#[test]
fn token_ends_where_it_started_and_fades() {
    let scene = compound_loop().unwrap();
    let token = scene
        .elements
        .iter()
        .find(|e| matches!(e.geometry, Geometry::Circle { .. }))
        .unwrap()
        .id;
    let states = Evaluator::states_at(&scene, scene.duration());
    let state = &states[token.index()];
    assert!(!state.visible);
    assert!(state.position.distance(Point::new(0.0, LOOP_RADIUS)) < 1e-9);
}

#[test]
fn task_cards_form_a_centered_row() {
    let scene = task_decomposition().unwrap();
    let rects = rounded_rects(&scene);
    assert_eq!(rects.len(), 4);
    let small = &rects[1..];
    for pair in small.windows(2) {
        let gap = pair[1].bounds().x0 - pair[0].bounds().x1;
        assert!(approx_eq!(f64, gap, 0.3, epsilon = 1e-9));
    }
    assert!(approx_eq!(f64, scene.duration(), 10.6, epsilon = 1e-9));
}

#[test]
fn checks_turn_card_strokes_green() {
    let scene = task_decomposition().unwrap();
    let states = Evaluator::states_at(&scene, scene.duration());
    let small: Vec<_> = rounded_rects(&scene)[1..].iter().map(|e| e.id).collect();
    for id in small {
        let style = &states[id.index()].style;
        assert_eq!(style.stroke, SUCCESS);
        assert_eq!(style.stroke_width, 3.0);
    }
}

#[test]
fn knowledge_file_receives_every_learning() {
    let scene = knowledge_compounding().unwrap();
    let bullets = scene
        .elements
        .iter()
        .filter(|e| matches!(&e.geometry, Geometry::Text { content, .. } if content.starts_with('•')))
        .count();
    assert_eq!(bullets, NEW_PATTERNS.len() + NEW_GOTCHAS.len());

    let states = Evaluator::states_at(&scene, scene.duration());
    let arrows_left = scene
        .elements
        .iter()
        .filter(|e| matches!(e.geometry, Geometry::Arrow { .. }) && states[e.id.index()].visible)
        .count();
    assert_eq!(arrows_left, 0);
}

#[test]
fn nightly_workflow_has_three_phases() {
    let scene = nightly_workflow().unwrap();
    assert_eq!(rounded_rects(&scene).len(), 3);
    let arrows = scene
        .elements
        .iter()
        .filter(|e| matches!(e.geometry, Geometry::Arrow { .. }))
        .count();
    assert_eq!(arrows, 2);
}

#[test]
fn full_explainer_ends_on_the_closing_line() {
    let scene = full_explainer().unwrap();
    let frame = Evaluator::eval_frame(&scene, scene.duration()).unwrap();
    let texts: Vec<&str> = frame
        .nodes
        .iter()
        .filter_map(|n| match &scene.elements[n.id.index()].geometry {
            Geometry::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["Stop Prompting.", "Start Compounding."]);
}
