//! Measurement engine for repeated-trial timing.
//!
//! This module provides:
//! - [`Bencher`], the engine itself, generic over its [`TimeSource`] so
//!   tests can script trial durations
//! - [`measure_minimum`] / [`measure_statistics`] free functions bound to
//!   the platform monotonic clock
//!
//! [`TimeSource`]: crate::clock::TimeSource

mod bencher;

pub use bencher::{measure_minimum, measure_statistics, Bencher};
