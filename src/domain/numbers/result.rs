//! ResultRecord - statistics derived from an InputVector.

use serde::{Deserialize, Serialize};

use super::input::{InputVector, INPUT_LEN};

/// Values strictly above this survive the filter.
pub const FILTER_THRESHOLD: f64 = 10.0;

/// The unrounded mean must exceed this for `avg_above_50`.
pub const AVERAGE_THRESHOLD: f64 = 50.0;

/// Decimal places kept in the displayed average.
pub const AVERAGE_DECIMALS: i32 = 2;

/// Derived statistics for one submission. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub original: InputVector,
    pub filtered: Vec<f64>,
    pub average: f64,
    pub avg_above_50: bool,
    pub positive_count: u32,
    pub is_even: bool,
    pub has_negative: bool,
}

impl ResultRecord {
    /// Computes every statistic from a validated input.
    ///
    /// `average` is rounded for display, while `avg_above_50` compares the
    /// unrounded mean. A mean of 50.004 therefore shows as 50.00 with the
    /// flag set, and 49.996 shows as 50.00 with the flag clear.
    pub fn compute(input: &InputVector) -> Self {
        let mean = mean_of(input);

        let positive_count = input.iter().filter(|v| *v > 0.0).count() as u32;

        let mut filtered: Vec<f64> = input.iter().filter(|v| *v > FILTER_THRESHOLD).collect();
        filtered.sort_by(f64::total_cmp);

        Self {
            original: *input,
            filtered,
            average: round_to(mean, AVERAGE_DECIMALS),
            avg_above_50: mean > AVERAGE_THRESHOLD,
            positive_count,
            is_even: positive_count & 1 == 0,
            has_negative: input.iter().any(|v| v < 0.0),
        }
    }
}

/// Arithmetic mean; divides before summing only when the plain sum overflows.
fn mean_of(input: &InputVector) -> f64 {
    let count = INPUT_LEN as f64;
    let sum = input.iter().sum::<f64>();
    if sum.is_finite() {
        sum / count
    } else {
        input.iter().map(|v| v / count).sum()
    }
}

/// Rounds half away from zero to `decimals` places.
///
/// Magnitudes so large that scaling overflows carry no fractional digits
/// and are returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn compute(values: [f64; 5]) -> ResultRecord {
        ResultRecord::compute(&InputVector::new(values))
    }

    #[test]
    fn mixed_values_example() {
        let result = compute([5.0, 15.0, -3.0, 60.0, 20.0]);

        assert_eq!(result.average, 19.4);
        assert!(!result.avg_above_50);
        assert_eq!(result.positive_count, 4);
        assert!(result.is_even);
        assert!(result.has_negative);
        assert_eq!(result.filtered, vec![15.0, 20.0, 60.0]);
        assert_eq!(result.original.values(), &[5.0, 15.0, -3.0, 60.0, 20.0]);
    }

    #[test]
    fn all_large_values_example() {
        let result = compute([60.0, 70.0, 80.0, 90.0, 100.0]);

        assert_eq!(result.average, 80.0);
        assert!(result.avg_above_50);
        assert_eq!(result.positive_count, 5);
        assert!(!result.is_even);
        assert!(!result.has_negative);
        assert_eq!(result.filtered, vec![60.0, 70.0, 80.0, 90.0, 100.0]);
    }

    #[test]
    fn filter_sorts_and_keeps_duplicates() {
        let result = compute([30.0, 11.0, 30.0, 10.0, 12.5]);
        assert_eq!(result.filtered, vec![11.0, 12.5, 30.0, 30.0]);
    }

    #[test]
    fn ten_is_not_above_the_filter_threshold() {
        let result = compute([10.0, 10.0, 10.0, 10.0, 10.0]);
        assert!(result.filtered.is_empty());
    }

    #[test]
    fn zero_is_neither_positive_nor_negative() {
        let result = compute([0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(result.positive_count, 0);
        assert!(result.is_even);
        assert!(!result.has_negative);
        assert_eq!(result.average, 0.0);
    }

    #[test]
    fn flag_uses_unrounded_mean_above_threshold() {
        // mean 50.004 rounds to 50.0 but is above 50
        let result = compute([50.0, 50.0, 50.0, 50.0, 50.02]);
        assert_eq!(result.average, 50.0);
        assert!(result.avg_above_50);
    }

    #[test]
    fn flag_uses_unrounded_mean_below_threshold() {
        // mean 49.996 rounds to 50.0 but is below 50
        let result = compute([50.0, 50.0, 50.0, 50.0, 49.98]);
        assert_eq!(result.average, 50.0);
        assert!(!result.avg_above_50);
    }

    #[test]
    fn mean_of_exactly_fifty_is_not_above() {
        let result = compute([50.0, 50.0, 50.0, 50.0, 50.0]);
        assert!(!result.avg_above_50);
    }

    #[test]
    fn round_to_rounds_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(1.0 / 3.0, 2), 0.33);
    }

    #[test]
    fn huge_values_keep_a_finite_average() {
        let result = compute([1e307; 5]);
        assert_eq!(result.average, 1e307);
        assert!(result.avg_above_50);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average"], serde_json::json!(1e307));
    }

    #[test]
    fn huge_negative_values_keep_a_finite_average() {
        let result = compute([-1e307; 5]);
        assert_eq!(result.average, -1e307);
        assert!(result.has_negative);
    }

    #[test]
    fn overflowing_sum_still_yields_finite_mean() {
        let result = compute([f64::MAX; 5]);
        assert!(result.average.is_finite());
        assert_eq!(result.average, f64::MAX);
        assert!(result.avg_above_50);
    }

    #[test]
    fn round_to_leaves_unscalable_values_unchanged() {
        assert_eq!(round_to(f64::MAX, 2), f64::MAX);
        assert_eq!(round_to(-f64::MAX, 2), -f64::MAX);
    }

    #[test]
    fn serializes_with_document_field_names() {
        let json = serde_json::to_value(compute([1.0, 2.0, 3.0, 4.0, 50.0])).unwrap();
        for key in [
            "original",
            "filtered",
            "average",
            "avg_above_50",
            "positive_count",
            "is_even",
            "has_negative",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    fn finite() -> impl Strategy<Value = f64> {
        -1.0e6..1.0e6
    }

    // Magnitudes up to 1e307 so five of them still sum to a finite value.
    fn wide() -> impl Strategy<Value = f64> {
        prop_oneof![-1.0e6..1.0e6, -1.0e307..1.0e307]
    }

    proptest! {
        #[test]
        fn positive_count_and_parity_match(values in prop::array::uniform5(finite())) {
            let result = compute(values);
            let expected = values.iter().filter(|v| **v > 0.0).count() as u32;
            prop_assert_eq!(result.positive_count, expected);
            prop_assert_eq!(result.is_even, expected % 2 == 0);
        }

        #[test]
        fn filtered_is_sorted_subsequence_above_ten(values in prop::array::uniform5(finite())) {
            let result = compute(values);
            prop_assert!(result.filtered.len() <= 5);
            prop_assert!(result.filtered.windows(2).all(|w| w[0] <= w[1]));

            let mut expected: Vec<f64> = values.iter().copied().filter(|v| *v > 10.0).collect();
            expected.sort_by(f64::total_cmp);
            prop_assert_eq!(&result.filtered, &expected);
        }

        #[test]
        fn average_is_rounded_mean(values in prop::array::uniform5(finite())) {
            let result = compute(values);
            let mean = values.iter().sum::<f64>() / 5.0;
            prop_assert!((result.average - mean).abs() <= 0.005 + 1e-9);
            prop_assert_eq!(result.avg_above_50, mean > 50.0);
        }

        #[test]
        fn average_stays_finite_for_any_finite_mean(values in prop::array::uniform5(wide())) {
            let result = compute(values);
            let mean = values.iter().sum::<f64>() / 5.0;
            prop_assert!(result.average.is_finite());
            // Scaling by 100 is only exact while the mean has fractional digits;
            // beyond that the rounded value may differ from the mean by a few ulps.
            let tolerance = 0.005 + 1e-9 + mean.abs() * f64::EPSILON * 4.0;
            prop_assert!((result.average - mean).abs() <= tolerance);
        }

        #[test]
        fn has_negative_iff_any_negative(values in prop::array::uniform5(finite())) {
            let result = compute(values);
            prop_assert_eq!(result.has_negative, values.iter().any(|v| *v < 0.0));
        }
    }
}
