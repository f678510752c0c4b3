//! Statistical reduction over timing samples.
//!
//! This module turns the sample set produced by one measurement invocation
//! into a [`Stats`] summary:
//! - Extremes and range straight from the sorted samples
//! - Kahan-compensated mean and unbiased sample variance
//! - Quartiles by the Method-3 (Tukey hinges variant) convention

mod kahan;
mod summary;

pub use summary::Stats;
