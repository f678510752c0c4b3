//! The repeated-trial measurement engine.
//!
//! One trial times a block of `iterations` consecutive invocations of the
//! candidate operation; the engine repeats this for `trials` independent
//! blocks and reduces the resulting sample set. Everything runs on the
//! calling thread with no state retained between calls.

use std::hint::black_box;

use crate::clock::{MonotonicClock, TimeSource};
use crate::statistics::Stats;

/// Measurement engine parameterized over its time source.
///
/// Production code uses the default [`MonotonicClock`]; tests inject a
/// scripted source to make trial durations deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bencher<C: TimeSource = MonotonicClock> {
    clock: C,
}

impl Bencher<MonotonicClock> {
    /// Create an engine backed by the platform monotonic clock.
    pub fn new() -> Self {
        Self {
            clock: MonotonicClock::new(),
        }
    }
}

impl<C: TimeSource> Bencher<C> {
    /// Create an engine backed by an explicit time source.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Time `iterations` invocations of `op` per trial, for `trials`
    /// trials, and return the fastest trial's block time in milliseconds.
    ///
    /// Minimum-of-many-trials is the standard low-noise estimator for
    /// micro-timings: scheduling and interrupt noise can only lengthen a
    /// trial, never shorten it below the true cost, so the minimum across
    /// trials approximates the noise-free block time.
    ///
    /// A trial whose clock query failed contributes −1.0 to the sample
    /// set (see [`TimeSource::elapsed_millis`]); a negative result
    /// therefore indicates a clock fault, not an instantaneous operation.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` or `trials` is zero.
    pub fn measure_minimum<F, T>(&self, mut op: F, iterations: u64, trials: u32) -> f64
    where
        F: FnMut() -> T,
    {
        let samples = self.run_trials(&mut op, iterations, trials);

        let mut fastest = samples[0];
        for &sample in &samples[1..] {
            if sample < fastest {
                fastest = sample;
            }
        }
        fastest
    }

    /// Time `iterations` invocations of `op` per trial, for `trials`
    /// trials, and reduce the full sample set to a [`Stats`] summary.
    ///
    /// With `per_iteration` set, each trial's block time is divided by
    /// `iterations` before the reduction, so the summary reports per-call
    /// cost rather than per-block cost.
    ///
    /// A trial whose clock query failed contributes −1.0 to the sample
    /// set and flows into the statistics like any other value; callers
    /// must treat negative durations in a report as clock faults.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` or `trials` is zero.
    pub fn measure_statistics<F, T>(
        &self,
        mut op: F,
        iterations: u64,
        trials: u32,
        per_iteration: bool,
    ) -> Stats
    where
        F: FnMut() -> T,
    {
        let mut samples = self.run_trials(&mut op, iterations, trials);

        if per_iteration {
            for sample in &mut samples {
                *sample /= iterations as f64;
            }
        }

        Stats::from_samples(&mut samples)
    }

    /// Run the timing loop and collect one block duration per trial.
    ///
    /// The sample buffer is owned by this call and dropped once the
    /// caller's reduction is done.
    fn run_trials<F, T>(&self, op: &mut F, iterations: u64, trials: u32) -> Vec<f64>
    where
        F: FnMut() -> T,
    {
        assert!(trials >= 1, "trials must be at least 1");
        assert!(iterations >= 1, "iterations must be at least 1");

        let mut samples = Vec::with_capacity(trials as usize);
        for _ in 0..trials {
            let start = self.clock.now();
            for _ in 0..iterations {
                black_box(op());
            }
            samples.push(self.clock.elapsed_millis(start));
        }
        samples
    }
}

/// Measure the fastest of `trials` blocks of `iterations` calls to `op`,
/// in milliseconds, on the platform monotonic clock.
///
/// # Panics
///
/// Panics if `iterations` or `trials` is zero.
pub fn measure_minimum<F, T>(op: F, iterations: u64, trials: u32) -> f64
where
    F: FnMut() -> T,
{
    Bencher::new().measure_minimum(op, iterations, trials)
}

/// Measure `trials` blocks of `iterations` calls to `op` on the platform
/// monotonic clock and return full summary statistics.
///
/// # Panics
///
/// Panics if `iterations` or `trials` is zero.
pub fn measure_statistics<F, T>(op: F, iterations: u64, trials: u32, per_iteration: bool) -> Stats
where
    F: FnMut() -> T,
{
    Bencher::new().measure_statistics(op, iterations, trials, per_iteration)
}
