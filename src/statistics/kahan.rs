//! Error-compensated floating-point summation.

/// Sum `values` with Kahan compensation.
///
/// Tracks the running round-off in a correction term and folds it back
/// into each subsequent addition, keeping the accumulated error bounded
/// independently of the number of terms. Both statistics passes (mean and
/// squared deviations) go through this.
pub(crate) fn kahan_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for value in values {
        let y = value - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}
