use float_cmp::approx_eq;

use super::*;

#[test]
fn default_trajectory_stops_after_fourth_step() {
    let gd = GradientDescent::default();
    let xs = gd.trajectory();
    let expected = [0.8, 0.32, 0.128, 0.0512];
    assert_eq!(xs.len(), expected.len());
    for (x, e) in xs.iter().zip(expected) {
        assert!(approx_eq!(f64, *x, e, epsilon = 1e-12), "{x} != {e}");
    }
}

#[test]
fn trajectory_matches_closed_form() {
    let gd = GradientDescent::default();
    for (i, x) in gd.trajectory().into_iter().enumerate() {
        assert!(approx_eq!(
            f64,
            x,
            gd.closed_form(i as u32 + 1),
            epsilon = 1e-12
        ));
    }
}

#[test]
fn max_steps_caps_without_convergence() {
    let gd = GradientDescent {
        learning_rate: 0.01,
        ..GradientDescent::default()
    };
    assert_eq!(gd.trajectory().len(), 8);
}

#[test]
fn loss_has_minimum_at_zero() {
    assert_eq!(GradientDescent::loss(0.0), 1.0);
    assert_eq!(GradientDescent::gradient(0.0), 0.0);
    assert!(GradientDescent::loss(2.0) > GradientDescent::loss(0.8));
}

#[test]
fn non_finite_parameters_are_rejected() {
    let gd = GradientDescent {
        x0: f64::INFINITY,
        ..GradientDescent::default()
    };
    assert!(gd.validate().is_err());
    GradientDescent::default().validate().unwrap();
}
