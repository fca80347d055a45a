use crate::{
    animation::effect::ElementState,
    foundation::error::{ExplainerError, ExplainerResult},
    scene::model::{ElementId, Scene},
    timeline::sequencer::{Action, Step},
};

/// Float slack allowed past the end of a timeline.
const END_EPSILON: f64 = 1e-9;

#[derive(Clone, Debug, serde::Serialize)]
/// Fully evaluated scene at one instant.
pub struct EvaluatedFrame {
    /// Evaluated time in seconds.
    pub time: f64,
    /// Visible elements in painter's order (creation order).
    pub nodes: Vec<EvaluatedNode>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// One visible element with its resolved state.
pub struct EvaluatedNode {
    pub id: ElementId,
    pub state: ElementState,
}

/// Stateless evaluator from scene timeline to per-element state.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(scene), fields(scene = %scene.name))]
    /// Evaluate the scene at `time_s` seconds.
    pub fn eval_frame(scene: &Scene, time_s: f64) -> ExplainerResult<EvaluatedFrame> {
        let duration = scene.duration();
        if !time_s.is_finite() || time_s < 0.0 || time_s > duration + END_EPSILON {
            return Err(ExplainerError::evaluation(format!(
                "time {time_s}s is outside scene '{}' (0..={duration}s)",
                scene.name
            )));
        }

        let states = Self::states_at(scene, time_s);
        let nodes = states
            .into_iter()
            .enumerate()
            .filter(|(_, s)| s.visible)
            .map(|(idx, state)| EvaluatedNode {
                id: ElementId(idx as u32),
                state,
            })
            .collect();

        Ok(EvaluatedFrame {
            time: time_s,
            nodes,
        })
    }

    /// State of every element (visible or not) at `time_s`, replaying steps from the start.
    pub fn states_at(scene: &Scene, time_s: f64) -> Vec<ElementState> {
        let mut states: Vec<ElementState> =
            scene.elements.iter().map(ElementState::hidden).collect();

        let mut clock = 0.0;
        for step in &scene.timeline.steps {
            if time_s < clock {
                break;
            }
            let fraction = if step.run_time > 0.0 {
                ((time_s - clock) / step.run_time).min(1.0)
            } else {
                1.0
            };
            let start = states.clone();
            apply_step(step, &start, fraction, &mut states);
            clock += step.run_time;
        }
        states
    }
}

/// An action with its `(start, end)` window as step fractions.
type Timed<'a> = (&'a Action, (f64, f64));

/// Apply every action of `step` at `fraction` of its run time.
///
/// `start` holds the element states at the beginning of the step; results land in `out`.
/// Actions on the same element run in window order: each one starts from the state the
/// earlier ones reached by its own start, so staggered moves accumulate.
pub fn apply_step(step: &Step, start: &[ElementState], fraction: f64, out: &mut [ElementState]) {
    let mut timed: Vec<Timed<'_>> = step.windowed_actions().collect();
    // Stable: actions sharing a window keep authoring order.
    timed.sort_by(|(a, wa), (b, wb)| {
        a.target
            .cmp(&b.target)
            .then(wa.0.total_cmp(&wb.0))
            .then(wa.1.total_cmp(&wb.1))
    });
    for run in timed.chunk_by(|(a, _), (b, _)| a.target == b.target) {
        let idx = run[0].0.target.index();
        let (Some(base), Some(to)) = (start.get(idx), out.get_mut(idx)) else {
            continue;
        };
        apply_element(run, base, fraction, to);
    }
}

/// `run` is every action on one element, sorted by window.
fn apply_element(run: &[Timed<'_>], base: &ElementState, fraction: f64, out: &mut ElementState) {
    let mut origins: Vec<ElementState> = Vec::with_capacity(run.len());
    for (k, (_, window)) in run.iter().enumerate() {
        let mut origin = base.clone();
        for ((prev, prev_window), from) in run[..k].iter().zip(&origins) {
            if precedes(*prev_window, *window) {
                apply_action(prev, *prev_window, from, window.0, &mut origin);
            }
        }
        origins.push(origin);
    }

    for (k, ((action, window), from)) in run.iter().zip(&origins).enumerate() {
        let queued =
            fraction < window.0 && run[..k].iter().any(|(_, prev)| precedes(*prev, *window));
        if !queued {
            apply_action(action, *window, from, fraction, out);
        }
    }
}

/// Whether an action in `earlier` feeds the starting state of one in `later`.
fn precedes(earlier: (f64, f64), later: (f64, f64)) -> bool {
    earlier.0 < later.0 || earlier.1 <= later.0
}

fn apply_action(
    action: &Action,
    (ws, we): (f64, f64),
    from: &ElementState,
    fraction: f64,
    out: &mut ElementState,
) {
    let width = we - ws;
    let local = if width > 0.0 {
        ((fraction - ws) / width).clamp(0.0, 1.0)
    } else if fraction >= ws {
        1.0
    } else {
        0.0
    };
    action.effect.apply(from, action.ease.apply(local), out);
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
