use float_cmp::approx_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn zero_points_is_invalid() {
    let err = circular(0, 2.0, Point::ORIGIN).unwrap_err();
    assert!(matches!(err, ExplainerError::InvalidLayout(_)));
    assert!(circular_at_angles(&[], 2.0, Point::ORIGIN).is_err());
}

#[test]
fn first_point_is_on_top() {
    let pts = circular(5, 2.2, Point::ORIGIN).unwrap();
    assert!(pts[0].x.abs() < 1e-12);
    assert!(approx_eq!(f64, pts[0].y, 2.2, epsilon = 1e-12));
}

#[test]
fn even_spacing_matches_explicit_loop_angles() {
    let even = circular(5, 2.2, Point::ORIGIN).unwrap();
    let explicit =
        circular_at_angles(&[90.0, 18.0, -54.0, -126.0, -198.0], 2.2, Point::ORIGIN).unwrap();
    // Even spacing runs counter-clockwise; the explicit loop runs clockwise.
    assert!(even[1].distance(explicit[4]) < 1e-9);
    assert!(even[4].distance(explicit[1]) < 1e-9);
}

#[test]
fn negative_radius_is_invalid() {
    assert!(circular(3, -1.0, Point::ORIGIN).is_err());
}

fn center_strategy() -> impl Strategy<Value = Point> {
    (-10.0f64..10.0, -10.0f64..10.0).prop_map(|(x, y)| Point::new(x, y))
}

/// Every point lies at exactly `radius` from the center.
fn check_points_on_circle(n: usize, radius: f64, center: Point) -> Result<(), TestCaseError> {
    let pts = circular(n, radius, center).map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(pts.len(), n);
    for p in pts {
        prop_assert!(approx_eq!(f64, p.distance(center), radius, epsilon = 1e-9));
    }
    Ok(())
}

/// Consecutive points are separated by the same chord.
fn check_even_spacing(n: usize, radius: f64) -> Result<(), TestCaseError> {
    let pts = circular(n, radius, Point::ORIGIN).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let chord = pts[0].distance(pts[1 % n]);
    for i in 0..n {
        let d = pts[i].distance(pts[(i + 1) % n]);
        prop_assert!(approx_eq!(f64, d, chord, epsilon = 1e-9));
    }
    Ok(())
}

proptest! {
    #[test]
    fn points_on_circle(n in 1usize..64, radius in 0.0f64..20.0, center in center_strategy()) {
        check_points_on_circle(n, radius, center)?;
    }

    #[test]
    fn even_spacing(n in 1usize..64, radius in 0.1f64..20.0) {
        check_even_spacing(n, radius)?;
    }
}
