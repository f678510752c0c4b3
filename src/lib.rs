//! # microbench
//!
//! Measure how long a candidate operation takes, with minimal overhead
//! and robust summary statistics.
//!
//! The crate has two moving parts:
//! - a monotonic, high-resolution [time source](clock) abstracted behind
//!   the [`TimeSource`] trait, with one platform backend selected at
//!   build time
//! - a [measurement engine](measurement) that times blocks of
//!   `iterations` calls across `trials` independent repetitions and
//!   reduces the samples to either the fastest block time or a full
//!   [`Stats`] summary (min, max, Kahan-compensated average, unbiased
//!   variance, Method-3 quartiles)
//!
//! ## Quick Start
//!
//! ```
//! use microbench::{measure_minimum, measure_statistics};
//!
//! // Fastest of 50 trials, each timing a block of 1000 calls.
//! let fastest_ms = measure_minimum(|| std::hint::black_box(2 + 2), 1000, 50);
//! assert!(fastest_ms >= 0.0);
//!
//! // Full per-call statistics over the same protocol.
//! let stats = measure_statistics(|| std::hint::black_box(2 + 2), 1000, 50, true);
//! assert!(stats.min() <= stats.median());
//! ```
//!
//! ## Clock faults
//!
//! A failed OS clock query does not panic: the affected trial records
//! exactly −1.0 milliseconds, and that value flows into the sample set
//! and statistics unmodified. A negative duration in a report therefore
//! means a clock fault for that trial, never a genuinely instantaneous
//! measurement.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod measurement;
pub mod statistics;

pub use clock::{MonotonicClock, TimePoint, TimeSource};
pub use measurement::{measure_minimum, measure_statistics, Bencher};
pub use statistics::Stats;

/// Benchmark `op` with the classic defaults: one call per trial, 100
/// trials, fastest trial time returned in milliseconds.
///
/// Shorthand for `measure_minimum(op, 1, 100)`. For operations much
/// faster than the clock resolution, raise `iterations` via
/// [`measure_minimum`] instead so each trial times a meaningful block.
pub fn microbench<F, T>(op: F) -> f64
where
    F: FnMut() -> T,
{
    measure_minimum(op, 1, 100)
}
