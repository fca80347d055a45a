use float_cmp::approx_eq;

use super::*;

fn loss_axes() -> Axes {
    Axes::new((-3.0, 3.0, 1.0), (0.0, 10.0, 2.0), 8.0, 5.0)
        .unwrap()
        .shifted(Vec2::new(0.0, -0.5))
}

#[test]
fn corners_map_to_box_edges() {
    let axes = loss_axes();
    let lo = axes.coords_to_point(-3.0, 0.0);
    let hi = axes.coords_to_point(3.0, 10.0);
    assert!(approx_eq!(f64, lo.x, -4.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, lo.y, -3.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, hi.x, 4.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, hi.y, 2.0, epsilon = 1e-12));
}

#[test]
fn x_axis_sits_at_data_zero() {
    let [x_axis, y_axis] = loss_axes().axis_lines();
    assert!(approx_eq!(f64, x_axis.0.y, -3.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, y_axis.0.x, 0.0, epsilon = 1e-12));
}

#[test]
fn ticks_skip_the_origin() {
    let ticks = loss_axes().ticks();
    // x: -3..=3 minus 0 -> 6, y: 0..=10 step 2 minus 0 -> 5
    assert_eq!(ticks.len(), 11);
}

#[test]
fn plot_samples_endpoints() {
    let axes = loss_axes();
    let pts = axes.plot(|x| x * x + 1.0, -2.5, 2.5, 51);
    assert_eq!(pts.len(), 51);
    assert_eq!(pts[0], axes.coords_to_point(-2.5, 7.25));
    assert_eq!(pts[25], axes.coords_to_point(0.0, 1.0));
}

#[test]
fn degenerate_ranges_are_rejected() {
    assert!(Axes::new((1.0, 1.0, 1.0), (0.0, 1.0, 1.0), 1.0, 1.0).is_err());
    assert!(Axes::new((0.0, 1.0, 0.0), (0.0, 1.0, 1.0), 1.0, 1.0).is_err());
    assert!(Axes::new((0.0, 1.0, 1.0), (0.0, 1.0, 1.0), 0.0, 1.0).is_err());
}
