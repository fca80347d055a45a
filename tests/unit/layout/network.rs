use float_cmp::approx_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn four_six_six_three_has_78_connections() {
    let layout = NetworkLayout::new([4, 6, 6, 3]).unwrap();
    assert_eq!(layout.connection_count(), 78);
    assert_eq!(layout.connection_pairs().len(), 78);
    assert_eq!(layout.neuron_count(), 19);
}

#[test]
fn pairs_are_row_major() {
    let layout = NetworkLayout::new([2, 3]).unwrap();
    let pairs = layout.connection_pairs();
    assert_eq!(pairs[0], ((0, 0), (1, 0)));
    assert_eq!(pairs[2], ((0, 0), (1, 2)));
    assert_eq!(pairs[3], ((0, 1), (1, 0)));
}

#[test]
fn layers_are_centered_horizontally() {
    let layout = NetworkLayout::new([4, 6, 6, 3]).unwrap();
    assert!(approx_eq!(f64, layout.layer_x(0), -3.75, epsilon = 1e-12));
    assert!(approx_eq!(f64, layout.layer_x(3), 3.75, epsilon = 1e-12));

    let positions = layout.positions();
    assert_eq!(positions[1].len(), 6);
    assert!(approx_eq!(f64, positions[1][0].y, 2.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, positions[1][5].y, -2.0, epsilon = 1e-12));
}

#[test]
fn single_neuron_sits_on_axis() {
    let layout = NetworkLayout::new([1]).unwrap();
    assert_eq!(layout.column(1), vec![0.0]);
    assert_eq!(layout.layer_x(0), 0.0);
    assert!(layout.connection_pairs().is_empty());
}

#[test]
fn empty_or_zero_layers_are_invalid() {
    assert!(matches!(
        NetworkLayout::new(Vec::<usize>::new()),
        Err(ExplainerError::InvalidLayout(_))
    ));
    assert!(NetworkLayout::new([3, 0, 2]).is_err());
}

/// Column span is `(s - 1) · row_spacing` and the column is symmetric about y = 0.
fn check_column_span(size: usize) -> Result<(), TestCaseError> {
    let layout = NetworkLayout::new([size]).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let ys = layout.column(size);
    prop_assert_eq!(ys.len(), size);

    let top = ys[0];
    let bottom = ys[size - 1];
    let span = (size as f64 - 1.0) * NetworkLayout::DEFAULT_ROW_SPACING;
    prop_assert!(approx_eq!(f64, top - bottom, span, epsilon = 1e-9));
    prop_assert!(approx_eq!(f64, top + bottom, 0.0, epsilon = 1e-9));
    for (a, b) in ys.iter().zip(ys.iter().rev()) {
        prop_assert!(approx_eq!(f64, *a, -*b, epsilon = 1e-9));
    }
    Ok(())
}

fn check_connection_count(sizes: Vec<usize>) -> Result<(), TestCaseError> {
    let layout =
        NetworkLayout::new(sizes.clone()).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let expected: usize = sizes.windows(2).map(|w| w[0] * w[1]).sum();
    prop_assert_eq!(layout.connection_pairs().len(), expected);
    Ok(())
}

proptest! {
    #[test]
    fn column_span_is_symmetric(size in 1usize..40) {
        check_column_span(size)?;
    }

    #[test]
    fn connection_count_matches_products(sizes in prop::collection::vec(1usize..12, 1..6)) {
        check_connection_count(sizes)?;
    }
}
