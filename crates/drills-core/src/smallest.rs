//! Index of the smallest element in a sequence of integers.

use crate::error::{DrillError, Result};
use crate::math::Array1;

/// Returned by [`smallest_index`] when there is nothing to scan.
pub const EMPTY_SENTINEL: isize = -1;

/// The fixed array the exercise ships with. Its minimum, 3, sits at index 7.
pub const DEFAULT_VALUES: [i64; 10] = [10, 56, 79, 102, 16, 89, 312, 3, 8, 24];

/// Scan the first `size` values and return the index of the first minimum,
/// or [`EMPTY_SENTINEL`] when `size` is 0.
///
/// A `size` larger than `values` is rejected instead of read out of bounds.
pub fn smallest_index(values: &[i64], size: usize) -> Result<isize> {
    if size > values.len() {
        return Err(DrillError::invalid(format!(
            "size {} exceeds the {} values supplied",
            size,
            values.len()
        )));
    }
    let scanned: Array1<i64> = values[..size].iter().copied().collect();
    Ok(match scanned.argmin() {
        Some(idx) => idx as isize,
        None => EMPTY_SENTINEL,
    })
}

pub fn describe(index: isize) -> String {
    if index == EMPTY_SENTINEL {
        "Empty Array, No smallest number found.".to_string()
    } else {
        format!("The smallest number is at index {}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_minimum_of_default_values() {
        assert_eq!(smallest_index(&DEFAULT_VALUES, DEFAULT_VALUES.len()).unwrap(), 7);
    }

    #[test]
    fn empty_input_returns_sentinel() {
        assert_eq!(smallest_index(&[], 0).unwrap(), EMPTY_SENTINEL);
        assert_eq!(smallest_index(&DEFAULT_VALUES, 0).unwrap(), EMPTY_SENTINEL);
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(smallest_index(&[4, -2, 8, -2], 4).unwrap(), 1);
    }

    #[test]
    fn size_limits_the_scan() {
        // Only 10, 56, 79, 102 are considered.
        assert_eq!(smallest_index(&DEFAULT_VALUES, 4).unwrap(), 0);
    }

    #[test]
    fn oversized_size_is_rejected() {
        assert!(matches!(
            smallest_index(&[1, 2], 3),
            Err(DrillError::InvalidInput(_))
        ));
    }

    #[test]
    fn describe_both_outcomes() {
        assert_eq!(describe(7), "The smallest number is at index 7");
        assert_eq!(describe(-1), "Empty Array, No smallest number found.");
    }
}
