//! Descriptive statistics over a sequence of floats.
//!
//! The conventions here are fixed and deliberately plain:
//!
//! - the mean is a left-to-right sum divided by the count, with no
//!   compensated summation;
//! - the median sorts a copy and averages the two middle values for even
//!   counts;
//! - the mode is the *first* value, in input order, whose frequency equals
//!   the maximum, and there is no mode when nothing repeats;
//! - the variance divides by `n - 1` and is exactly `0.0` below two values.
//!
//! Reports label the last two metrics "POPULATION" even though the divisor
//! is the sample one. Both the label and the formula are kept as they are
//! because downstream verification compares the report text.

use crate::error::{ReportError, Result};
use crate::frequency::FrequencyTable;

/// Float key for frequency counting. `-0.0` and `0.0` share a key. NaN
/// never equals anything, itself included, so each NaN is keyed by its
/// position and stays a singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum FloatKey {
    Number(u64),
    Nan(usize),
}

impl FloatKey {
    fn of(position: usize, value: f64) -> Self {
        if value.is_nan() {
            Self::Nan(position)
        } else if value == 0.0 {
            Self::Number(0.0_f64.to_bits())
        } else {
            Self::Number(value.to_bits())
        }
    }
}

/// Every metric the statistics report prints.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

/// Compute all metrics for a non-empty sequence.
///
/// # Errors
///
/// Returns [`ReportError::EmptyInput`] for an empty slice. Callers that can
/// see an empty result should branch to the no-data report first.
pub fn describe(values: &[f64]) -> Result<Summary> {
    let Some(median) = median(values) else {
        return Err(ReportError::EmptyInput);
    };
    let mean = mean(values);
    let variance = variance(values, mean);

    Ok(Summary {
        count: values.len(),
        mean,
        median,
        mode: mode(values),
        variance,
        std_dev: std_dev(variance)?,
    })
}

/// Arithmetic mean, summed in input order. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    let total = values.iter().fold(0.0, |acc, value| acc + value);
    total / values.len() as f64
}

/// Middle value of the sorted sequence, or the mean of the two middle
/// values for even lengths. `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted.get(mid).copied()
    } else {
        let lower = sorted.get(mid.checked_sub(1)?)?;
        let upper = sorted.get(mid)?;
        Some((lower + upper) / 2.0)
    }
}

/// First value in input order that reaches the highest frequency.
///
/// Returns `None` when no value occurs more than once.
pub fn mode(values: &[f64]) -> Option<f64> {
    let freq: FrequencyTable<FloatKey> = values
        .iter()
        .enumerate()
        .map(|(position, value)| FloatKey::of(position, *value))
        .collect();

    let max_count = freq.max_count();
    if max_count <= 1 {
        return None;
    }

    values
        .iter()
        .enumerate()
        .find(|(position, value)| freq.count(&FloatKey::of(*position, **value)) == max_count)
        .map(|(_, value)| *value)
}

/// Sum of squared deviations from `mean` divided by `n - 1`; `0.0` when
/// fewer than two values are given.
pub fn variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let total = values.iter().fold(0.0, |acc, value| {
        let diff = value - mean;
        acc + diff * diff
    });
    total / (values.len() - 1) as f64
}

/// Square root of `variance`.
///
/// # Errors
///
/// Returns [`ReportError::Domain`] if `variance` is negative.
pub fn std_dev(variance: f64) -> Result<f64> {
    if variance < 0.0 {
        return Err(ReportError::Domain(format!(
            "square root of negative variance {variance}"
        )));
    }
    Ok(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_three_values() -> Result<()> {
        let summary = describe(&[10.0, 20.0, 30.0])?;
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.median, 20.0);
        assert_eq!(summary.mode, None);
        assert_eq!(summary.variance, 100.0);
        assert_eq!(summary.std_dev, 10.0);
        Ok(())
    }

    #[test]
    fn test_describe_empty_is_error() {
        assert!(matches!(describe(&[]), Err(ReportError::EmptyInput)));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[7.0]), Some(7.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_ignores_input_order() {
        let forward = [1.5, -2.0, 9.0, 4.25, 0.0, 3.0];
        let mut reversed = forward;
        reversed.reverse();
        let mut rotated = forward;
        rotated.rotate_left(2);

        assert_eq!(median(&forward), Some(2.25));
        assert_eq!(median(&reversed), median(&forward));
        assert_eq!(median(&rotated), median(&forward));
    }

    #[test]
    fn test_mode_first_occurrence_wins_ties() {
        assert_eq!(mode(&[3.0, 1.0, 3.0, 1.0]), Some(3.0));
        assert_eq!(mode(&[1.0, 3.0, 3.0, 1.0]), Some(1.0));
        assert_eq!(mode(&[2.0, 5.0, 5.0, 2.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_mode_none_without_repeats() {
        assert_eq!(mode(&[1.0, 2.0, 3.0]), None);
        assert_eq!(mode(&[4.0]), None);
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn test_mode_treats_signed_zeros_as_equal() {
        let found = mode(&[-0.0, 1.0, 0.0]);
        assert_eq!(found, Some(0.0));
        assert!(found.is_some_and(|v| v.is_sign_negative()), "first occurrence is -0.0");
    }

    #[test]
    fn test_mode_never_matches_nan() {
        assert_eq!(mode(&[f64::NAN, f64::NAN, 1.0]), None);
        assert_eq!(mode(&[f64::NAN, 2.0, f64::NAN, 2.0]), Some(2.0));
        assert!(mode(&[f64::NAN; 3]).is_none());
    }

    #[test]
    fn test_variance_uses_n_minus_one() {
        let values = [2.0, 4.0];
        assert_eq!(variance(&values, mean(&values)), 2.0);
        assert_eq!(variance(&[42.0], 42.0), 0.0);
        assert_eq!(variance(&[], 0.0), 0.0);
    }

    #[test]
    fn test_single_value_summary() -> Result<()> {
        let summary = describe(&[-3.5])?;
        assert_eq!(summary.mean, -3.5);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_dev, 0.0);
        Ok(())
    }

    #[test]
    fn test_mean_is_plain_left_fold() {
        let values = [0.1, 0.2, 0.3];
        assert_eq!(mean(&values), ((0.1 + 0.2) + 0.3) / 3.0);
    }

    #[test]
    fn test_std_dev_rejects_negative_variance() {
        assert!(matches!(std_dev(-1.0), Err(ReportError::Domain(_))));
        assert!(matches!(std_dev(2.25), Ok(v) if v == 1.5));
    }
}
