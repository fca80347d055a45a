use super::*;

fn action(id: u32) -> Action {
    Action {
        target: ElementId(id),
        effect: Effect::Create,
        ease: Ease::Linear,
        window: FULL_WINDOW,
    }
}

fn staggered(n: u32, lag: f64) -> Lane {
    Lane {
        lag_ratio: lag,
        slots: (0..n)
            .map(|i| Slot {
                actions: vec![action(i)],
            })
            .collect(),
    }
}

#[test]
fn single_slot_spans_whole_step() {
    let lane = Lane::together(vec![action(0), action(1)]);
    assert_eq!(lane.slot_window(0), (0.0, 1.0));
}

#[test]
fn stagger_windows_end_exactly_at_one() {
    let lane = staggered(4, 0.3);
    let (first_start, _) = lane.slot_window(0);
    let (_, last_end) = lane.slot_window(3);
    assert_eq!(first_start, 0.0);
    assert!((last_end - 1.0).abs() < 1e-12);

    let f = 1.0 / (1.0 + 3.0 * 0.3);
    let (s1, e1) = lane.slot_window(1);
    assert!((s1 - 0.3 * f).abs() < 1e-12);
    assert!((e1 - s1 - f).abs() < 1e-12);
}

#[test]
fn zero_lag_plays_all_slots_together() {
    let lane = staggered(3, 0.0);
    for i in 0..3 {
        assert_eq!(lane.slot_window(i), (0.0, 1.0));
    }
}

#[test]
fn schedule_is_sequential() {
    let timeline = Timeline {
        steps: vec![
            Step {
                run_time: 1.5,
                lanes: vec![Lane::together(vec![action(0)])],
            },
            Step::wait(1.0),
            Step {
                run_time: 2.0,
                lanes: vec![staggered(4, 0.3)],
            },
        ],
    };
    let schedule = timeline.schedule().unwrap();
    assert_eq!(schedule.duration, 4.5);
    assert_eq!(schedule.steps[1].start, 1.5);
    assert_eq!(schedule.steps[2].start, 2.5);
    assert_eq!(schedule.steps[2].end, 4.5);
    assert_eq!(schedule.steps[2].actions, 4);
    assert!(schedule.steps[1].effects.is_empty());
    assert_eq!(schedule.steps[0].effects, vec!["create".to_owned()]);
    assert!(timeline.steps[1].is_wait());
}

#[test]
fn invalid_timing_is_rejected() {
    let zero = Timeline {
        steps: vec![Step::wait(0.0)],
    };
    assert!(matches!(
        zero.validate(),
        Err(ExplainerError::Animation(_))
    ));

    let nan = Timeline {
        steps: vec![Step::wait(f64::NAN)],
    };
    assert!(nan.validate().is_err());

    let negative_lag = Timeline {
        steps: vec![Step {
            run_time: 1.0,
            lanes: vec![staggered(2, -0.1)],
        }],
    };
    assert!(negative_lag.schedule().is_err());
}

#[test]
fn action_windows_nest_inside_slot_windows() {
    let mut inner = action(1);
    inner.window = (0.5, 1.0);
    let lane = Lane {
        lag_ratio: 1.0,
        slots: vec![
            Slot {
                actions: vec![action(0)],
            },
            Slot {
                actions: vec![inner],
            },
        ],
    };
    let step = Step {
        run_time: 1.0,
        lanes: vec![lane],
    };
    let windows: Vec<(f64, f64)> = step.windowed_actions().map(|(_, w)| w).collect();
    assert_eq!(windows, vec![(0.0, 0.5), (0.75, 1.0)]);
    assert_eq!(compose_window((0.2, 0.6), INSTANT), (0.2, 0.2));
}

#[test]
fn out_of_range_action_window_is_rejected() {
    let mut bad = action(0);
    bad.window = (0.6, 0.4);
    let timeline = Timeline {
        steps: vec![Step {
            run_time: 1.0,
            lanes: vec![Lane::together(vec![bad])],
        }],
    };
    assert!(matches!(
        timeline.validate(),
        Err(ExplainerError::Animation(_))
    ));
}
