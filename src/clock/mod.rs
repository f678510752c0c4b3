//! Monotonic, high-resolution time source.
//!
//! The measurement engine never talks to the OS clock directly; it goes
//! through the [`TimeSource`] trait so tests can script durations. The one
//! production implementation is [`MonotonicClock`], backed per target by:
//!
//! - **unix**: `clock_gettime(CLOCK_MONOTONIC_RAW)` (plain
//!   `CLOCK_MONOTONIC` where the raw variant does not exist)
//! - **windows**: `QueryPerformanceCounter`
//! - **other**: `std::time::Instant` anchored at first use
//!
//! A failed clock query is reported through the [`TimePoint::FAILED`]
//! sentinel rather than a panic or `Result`; elapsed-time computations
//! involving a failed timestamp return exactly −1.0.

mod monotonic;

pub use monotonic::{MonotonicClock, TimePoint};

/// A monotonic clock the measurement engine can query.
///
/// `Instant` is deliberately opaque: timestamps are only meaningful when
/// handed back to the same source for an elapsed-time computation.
pub trait TimeSource {
    /// Timestamp type produced by this source.
    type Instant: Copy;

    /// Capture the current value of the clock.
    ///
    /// Must not be affected by wall-clock adjustments. Sources that can
    /// fail report it through their timestamp value (see
    /// [`TimePoint::FAILED`]) rather than panicking.
    fn now(&self) -> Self::Instant;

    /// Milliseconds elapsed since `start`, or exactly −1.0 when `start`
    /// is a failure sentinel or the re-query fails.
    fn elapsed_millis(&self, start: Self::Instant) -> f64;
}

/// Capture the current monotonic timestamp.
///
/// Convenience for [`MonotonicClock::now`]; check
/// [`TimePoint::is_failed`] before feeding the result into a duration
/// computation.
pub fn now() -> TimePoint {
    MonotonicClock.now()
}

/// Milliseconds elapsed since `start` on the monotonic clock, or −1.0 on
/// clock failure.
pub fn elapsed_millis(start: TimePoint) -> f64 {
    MonotonicClock.elapsed_millis(start)
}

/// Suspend the calling thread for approximately `millis` milliseconds.
///
/// Best-effort accuracy; intended for surrounding tooling (cooldown
/// between benchmark runs and the like), not for the measurement loop
/// itself.
pub fn sleep_millis(millis: u64) {
    std::thread::sleep(std::time::Duration::from_millis(millis));
}
