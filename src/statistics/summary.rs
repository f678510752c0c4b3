//! Summary statistics over a completed sample set.
//!
//! A [`Stats`] value is built exactly once from the trial durations of a
//! single measurement and is immutable afterwards. The reduction sorts the
//! sample set in place, then derives the extremes, a compensated mean, the
//! unbiased sample variance, and Method-3 quartiles.

use serde::{Deserialize, Serialize};

use super::kahan::kahan_sum;

/// Immutable summary statistics for one set of trial durations.
///
/// All values carry the unit of the input samples (milliseconds when
/// produced by the measurement engine). Constructed via
/// [`Stats::from_samples`]; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    min: f64,
    max: f64,
    avg: f64,
    variance: f64,
    q1: f64,
    median: f64,
    q3: f64,
}

impl Stats {
    /// Reduce a completed sample set to summary statistics.
    ///
    /// Sorts `samples` ascending in place, then computes:
    ///
    /// 1. `min` / `max` from the sorted extremes.
    /// 2. Average via Kahan-compensated summation — trial counts can reach
    ///    the hundreds, where naive summation visibly drifts at timing
    ///    magnitudes.
    /// 3. Unbiased sample variance (second compensated pass over squared
    ///    deviations, divided by n − 1).
    /// 4. Quartiles by the Method-3 convention (Moore & McCabe / Tukey
    ///    hinges variant), branching on `n mod 4`.
    ///
    /// A single-sample set is the terminal case: every location estimate
    /// equals the sample and the variance is zero.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    pub fn from_samples(samples: &mut [f64]) -> Self {
        assert!(
            !samples.is_empty(),
            "Cannot compute statistics of an empty sample set"
        );

        samples.sort_unstable_by(|a, b| a.total_cmp(b));

        let n = samples.len();
        let min = samples[0];
        let max = samples[n - 1];

        if n == 1 {
            return Self {
                min,
                max,
                avg: min,
                variance: 0.0,
                q1: min,
                median: min,
                q3: min,
            };
        }

        let avg = kahan_sum(samples.iter().copied()) / n as f64;
        let variance = kahan_sum(samples.iter().map(|&x| {
            let d = x - avg;
            d * d
        })) / (n - 1) as f64;

        let (q1, median, q3) = quartiles(samples);

        Self {
            min,
            max,
            avg,
            variance,
            q1,
            median,
            q3,
        }
    }

    /// Smallest sample.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Spread between the largest and smallest sample.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Compensated arithmetic mean.
    pub fn avg(&self) -> f64 {
        self.avg
    }

    /// Unbiased sample variance (n − 1 denominator).
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Sample standard deviation (square root of the variance).
    pub fn stddev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// First quartile.
    pub fn q1(&self) -> f64 {
        self.q1
    }

    /// Median (second quartile).
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Third quartile.
    pub fn q3(&self) -> f64 {
        self.q3
    }
}

/// Method-3 quartiles of a sorted slice with at least two elements.
///
/// The index arithmetic is exact integer division on the zero-based sorted
/// slice with `k = n / 4`:
///
/// - n even: median is the mean of the two central elements;
///   `n % 4 == 0` averages adjacent pairs at the quarter marks, while
///   `n % 4 == 2` reads single elements at the quarter indices.
/// - n odd: median is the central element; `n % 4 == 1` and `n % 4 == 3`
///   take 25/75 weighted averages of neighbouring elements, with the
///   weights reversed and the indices shifted between the two branches.
fn quartiles(sorted: &[f64]) -> (f64, f64, f64) {
    let n = sorted.len();
    debug_assert!(n >= 2);

    let k = n / 4;

    if n % 2 == 0 {
        let median = (sorted[n / 2 - 1] + sorted[n / 2]) * 0.5;
        let (q1, q3) = if n % 4 == 0 {
            (
                (sorted[k - 1] + sorted[k]) * 0.5,
                (sorted[n / 2 + k - 1] + sorted[n / 2 + k]) * 0.5,
            )
        } else {
            (sorted[k], sorted[n / 2 + k])
        };
        (q1, median, q3)
    } else {
        let median = sorted[n / 2];
        let (q1, q3) = if n % 4 == 1 {
            (
                sorted[k - 1] * 0.25 + sorted[k] * 0.75,
                sorted[3 * k] * 0.75 + sorted[3 * k + 1] * 0.25,
            )
        } else {
            (
                sorted[k] * 0.75 + sorted[k + 1] * 0.25,
                sorted[3 * k + 1] * 0.25 + sorted[3 * k + 2] * 0.75,
            )
        };
        (q1, median, q3)
    }
}
