use crate::{
    animation::{ease::Ease, effect::Effect},
    foundation::error::{ExplainerError, ExplainerResult},
    scene::model::ElementId,
};

/// Whole span of the enclosing window.
pub const FULL_WINDOW: (f64, f64) = (0.0, 1.0);

/// Zero-width window at the start: the action lands completed as the step begins.
pub const INSTANT: (f64, f64) = (0.0, 0.0);

fn full_window() -> (f64, f64) {
    FULL_WINDOW
}

/// One effect applied to one element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Action {
    pub target: ElementId,
    pub effect: Effect,
    pub ease: Ease,
    /// Sub-window inside the slot, as fractions of the slot's own window.
    #[serde(default = "full_window")]
    pub window: (f64, f64),
}

/// `(start, end)` of item `i` among `n` staggered by `lag_ratio`, as fractions of the span.
pub fn stagger_window(n: usize, lag_ratio: f64, i: usize) -> (f64, f64) {
    if n <= 1 {
        return FULL_WINDOW;
    }
    let f = 1.0 / (1.0 + (n as f64 - 1.0) * lag_ratio);
    let start = i as f64 * lag_ratio * f;
    (start, (start + f).min(1.0))
}

/// Map `inner`, given as fractions of `outer`, into the span `outer` lives in.
pub fn compose_window(outer: (f64, f64), inner: (f64, f64)) -> (f64, f64) {
    let width = outer.1 - outer.0;
    (outer.0 + inner.0 * width, outer.0 + inner.1 * width)
}

/// Actions that start and end together.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    pub actions: Vec<Action>,
}

/// A staggered sequence of slots inside one step.
///
/// With `n` slots and lag ratio `r`, every slot lasts `f = 1 / (1 + (n - 1) r)` of the step and
/// slot `i` starts at `i * r * f`. A lag of zero plays all slots at once.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Lane {
    pub lag_ratio: f64,
    pub slots: Vec<Slot>,
}

impl Lane {
    /// Single slot, no stagger.
    pub fn together(actions: Vec<Action>) -> Self {
        Self {
            lag_ratio: 0.0,
            slots: vec![Slot { actions }],
        }
    }

    /// `(start, end)` of slot `i` as fractions of the step.
    pub fn slot_window(&self, i: usize) -> (f64, f64) {
        stagger_window(self.slots.len(), self.lag_ratio, i)
    }
}

/// One `play` (or `wait`) call: lanes run concurrently for `run_time` seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    pub run_time: f64,
    pub lanes: Vec<Lane>,
}

impl Step {
    pub fn wait(run_time: f64) -> Self {
        Self {
            run_time,
            lanes: Vec::new(),
        }
    }

    pub fn is_wait(&self) -> bool {
        self.lanes.iter().all(|l| l.slots.is_empty())
    }

    /// Every action in the step with its `(start, end)` window as step fractions.
    pub fn windowed_actions(&self) -> impl Iterator<Item = (&Action, (f64, f64))> {
        self.lanes.iter().flat_map(|lane| {
            lane.slots.iter().enumerate().flat_map(move |(i, slot)| {
                let window = lane.slot_window(i);
                slot.actions
                    .iter()
                    .map(move |a| (a, compose_window(window, a.window)))
            })
        })
    }

    fn validate(&self, index: usize) -> ExplainerResult<()> {
        if !self.run_time.is_finite() || self.run_time <= 0.0 {
            return Err(ExplainerError::animation(format!(
                "step {index}: run_time must be finite and > 0, got {}",
                self.run_time
            )));
        }
        for lane in &self.lanes {
            if !lane.lag_ratio.is_finite() || lane.lag_ratio < 0.0 {
                return Err(ExplainerError::animation(format!(
                    "step {index}: lag_ratio must be finite and >= 0, got {}",
                    lane.lag_ratio
                )));
            }
            for action in lane.slots.iter().flat_map(|s| s.actions.iter()) {
                let (start, end) = action.window;
                if !(0.0..=1.0).contains(&start) || !(start..=1.0).contains(&end) {
                    return Err(ExplainerError::animation(format!(
                        "step {index}: action window ({start}, {end}) must satisfy 0 <= start <= end <= 1"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Strictly sequential list of steps.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub steps: Vec<Step>,
}

impl Timeline {
    pub fn validate(&self) -> ExplainerResult<()> {
        for (i, step) in self.steps.iter().enumerate() {
            step.validate(i)?;
        }
        Ok(())
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.steps.iter().map(|s| s.run_time).sum()
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.steps
            .iter()
            .flat_map(|s| s.lanes.iter())
            .flat_map(|l| l.slots.iter())
            .flat_map(|s| s.actions.iter())
    }

    /// Absolute start time of every step.
    pub fn step_starts(&self) -> Vec<f64> {
        let mut t = 0.0;
        self.steps
            .iter()
            .map(|s| {
                let start = t;
                t += s.run_time;
                start
            })
            .collect()
    }

    /// Resolve absolute times for every step.
    pub fn schedule(&self) -> ExplainerResult<Schedule> {
        self.validate()?;
        let starts = self.step_starts();
        let steps = self
            .steps
            .iter()
            .zip(starts)
            .enumerate()
            .map(|(index, (step, start))| {
                let mut effects: Vec<&'static str> =
                    step.windowed_actions().map(|(a, _)| a.effect.name()).collect();
                effects.sort_unstable();
                effects.dedup();
                ScheduledStep {
                    index,
                    start,
                    end: start + step.run_time,
                    lanes: step.lanes.len(),
                    actions: step.windowed_actions().count(),
                    effects: effects.into_iter().map(str::to_owned).collect(),
                }
            })
            .collect();
        Ok(Schedule {
            duration: self.duration(),
            steps,
        })
    }
}

/// Serializable timing summary of a timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Schedule {
    pub duration: f64,
    pub steps: Vec<ScheduledStep>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledStep {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub lanes: usize,
    pub actions: usize,
    /// Distinct effect names in the step, empty for waits.
    pub effects: Vec<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;
