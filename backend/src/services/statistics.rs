//! Descriptive statistics over validated numbers.

use std::cmp::Ordering;

use crate::api::StatsResult;
use crate::models::ValidatedNumbers;

/// Compute descriptive statistics for a validated sequence.
///
/// Never fails: the input is non-empty and finite. With a single value the
/// sample standard deviation is undefined and reported as `f64::NAN`.
pub fn compute(values: &ValidatedNumbers) -> StatsResult {
    let values = values.as_slice();
    let count = values.len();
    let n = count as f64;

    let sum: f64 = values.iter().sum();

    let mut sorted_values = values.to_vec();
    sorted_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let min = sorted_values[0];
    let max = sorted_values[count - 1];

    // Rounding in `sum` can push the quotient one ulp past the extremes.
    // An overflowed sum stays non-finite.
    let mean = sum / n;
    let mean = if mean.is_finite() {
        mean.clamp(min, max)
    } else {
        mean
    };

    let median = if count % 2 == 0 {
        (sorted_values[count / 2 - 1] + sorted_values[count / 2]) / 2.0
    } else {
        sorted_values[count / 2]
    };

    let squared_deviations = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>();

    let stdev_population = (squared_deviations / n).sqrt();
    let stdev_sample = if count > 1 {
        (squared_deviations / (n - 1.0)).sqrt()
    } else {
        f64::NAN
    };

    StatsResult {
        count,
        sum,
        mean,
        median,
        min,
        max,
        stdev_population,
        stdev_sample,
        sorted_values,
    }
}
