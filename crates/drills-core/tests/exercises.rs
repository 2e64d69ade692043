//! Property and reference-value tests for the five exercises.

use drills_core::input::parse_number;
use drills_core::matrix_adder::{add_matrices, matrix_from_values, render_report, Dimensions};
use drills_core::sequence;
use drills_core::sign::{classify_str, Sign};
use drills_core::smallest::{smallest_index, DEFAULT_VALUES, EMPTY_SENTINEL};
use drills_core::sorter::sort_triple;
use drills_core::DrillError;
use proptest::prelude::*;

fn finite() -> std::ops::Range<f64> {
    -1.0e6..1.0e6f64
}

fn matrix_pair() -> impl Strategy<Value = (usize, usize, Vec<f64>, Vec<f64>)> {
    (0usize..6, 0usize..6).prop_flat_map(|(rows, cols)| {
        let n = rows * cols;
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(finite(), n),
            prop::collection::vec(finite(), n),
        )
    })
}

proptest! {
    #[test]
    fn sum_is_element_wise((rows, cols, a, b) in matrix_pair()) {
        let dims = Dimensions::new(rows, cols, 10).unwrap();
        let ma = matrix_from_values(dims, a).unwrap();
        let mb = matrix_from_values(dims, b).unwrap();
        let sum = add_matrices(&ma, &mb).unwrap();
        prop_assert_eq!(sum.shape(), (rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                prop_assert_eq!(sum[(i, j)], ma[(i, j)] + mb[(i, j)]);
            }
        }
    }

    #[test]
    fn sorted_triple_is_ordered_permutation(v in prop::array::uniform3(finite())) {
        let sorted = sort_triple(v);
        prop_assert!(sorted[0] <= sorted[1] && sorted[1] <= sorted[2]);

        let mut expected = v.to_vec();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(sorted.to_vec(), expected);
    }

    #[test]
    fn smallest_index_points_at_first_minimum(values in prop::collection::vec(-50i64..50, 0..20)) {
        let idx = smallest_index(&values, values.len()).unwrap();
        if values.is_empty() {
            prop_assert_eq!(idx, EMPTY_SENTINEL);
        } else {
            let idx = idx as usize;
            let min = *values.iter().min().unwrap();
            prop_assert_eq!(values[idx], min);
            prop_assert!(values[..idx].iter().all(|&v| v > min));
        }
    }

    #[test]
    fn classification_agrees_with_comparisons(v in finite()) {
        let (parsed, sign) = classify_str(&v.to_string()).unwrap();
        prop_assert_eq!(parsed, v);
        let expected = if v > 0.0 { Sign::Positive } else if v < 0.0 { Sign::Negative } else { Sign::Zero };
        prop_assert_eq!(sign, expected);
    }
}

#[test]
fn reference_values() {
    assert_eq!(classify_str("5").unwrap().1, Sign::Positive);
    assert_eq!(classify_str("-3.2").unwrap().1, Sign::Negative);
    assert_eq!(classify_str("0").unwrap().1, Sign::Zero);
    assert!(matches!(classify_str("abc"), Err(DrillError::Parse { .. })));

    let seq = sequence::generate();
    assert_eq!(seq.len(), 50);
    assert_eq!(seq[10], 100.0);
    assert_eq!(seq[30], 90.0);

    assert_eq!(smallest_index(&DEFAULT_VALUES, 10).unwrap(), 7);
    assert_eq!(smallest_index(&[], 0).unwrap(), -1);
}

#[test]
fn repeated_runs_render_identically() {
    let first = sequence::render_rows(&sequence::generate(), sequence::ROW_WIDTH).unwrap();
    let second = sequence::render_rows(&sequence::generate(), sequence::ROW_WIDTH).unwrap();
    assert_eq!(first, second);

    let dims = Dimensions::parse("2", "1", 10).unwrap();
    let a = matrix_from_values(dims, vec![parse_number("1.5").unwrap(), 2.0]).unwrap();
    let b = matrix_from_values(dims, vec![0.5, -2.0]).unwrap();
    let sum = add_matrices(&a, &b).unwrap();
    let report = render_report(&a, &b, &sum);
    assert_eq!(report, render_report(&a, &b, &add_matrices(&a, &b).unwrap()));
    assert_eq!(report, "1.5\n2\n++\n0.5\n-2\n===\n2\n0\n");
}
