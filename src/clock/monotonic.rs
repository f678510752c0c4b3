//! Platform-specific monotonic clock backends.
//!
//! Exactly one backend is compiled per target:
//! - unix: `clock_gettime` with the raw monotonic clock where the OS has
//!   one, so NTP slew cannot bend measurements
//! - windows: `QueryPerformanceCounter` / `QueryPerformanceFrequency`
//! - other targets: `std::time::Instant` anchored at first use
//!
//! Every backend shares the same failure contract: a clock query that
//! fails yields [`TimePoint::FAILED`], and any elapsed-time computation
//! touching a failed timestamp yields exactly −1.0.

use std::sync::atomic::{compiler_fence, Ordering};

use super::TimeSource;

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios"
))]
const CLOCK_ID: libc::clockid_t = libc::CLOCK_MONOTONIC_RAW;

#[cfg(all(
    unix,
    not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    ))
))]
const CLOCK_ID: libc::clockid_t = libc::CLOCK_MONOTONIC;

/// Opaque monotonic timestamp captured by [`MonotonicClock`].
///
/// Not meaningful as an absolute value; two `TimePoint`s taken from the
/// same clock are subtracted into an elapsed duration via
/// [`MonotonicClock::elapsed_millis`]. The representation is
/// platform-defined: a (seconds, nanoseconds) pair on unix, a performance
/// counter tick count on windows.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePoint {
    sec: i64,
    nsec: i64,
}

#[cfg(unix)]
impl TimePoint {
    /// Sentinel for a failed clock query.
    pub const FAILED: TimePoint = TimePoint { sec: -1, nsec: -1 };

    /// Whether this timestamp came from a failed clock query.
    pub fn is_failed(&self) -> bool {
        self.sec == -1 && self.nsec == -1
    }
}

#[cfg(unix)]
fn query_clock() -> TimePoint {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    // Compiler fences pin the clock read in place relative to the code
    // being timed. No hardware fence is implied.
    compiler_fence(Ordering::SeqCst);
    let rc = unsafe { libc::clock_gettime(CLOCK_ID, &mut ts) };
    compiler_fence(Ordering::SeqCst);

    if rc != 0 {
        return TimePoint::FAILED;
    }
    TimePoint {
        sec: ts.tv_sec as i64,
        nsec: ts.tv_nsec as i64,
    }
}

#[cfg(unix)]
fn elapsed_between(start: TimePoint, now: TimePoint) -> f64 {
    (now.sec - start.sec) as f64 * 1000.0 + (now.nsec - start.nsec) as f64 / 1_000_000.0
}

/// Opaque monotonic timestamp captured by [`MonotonicClock`].
///
/// Not meaningful as an absolute value; two `TimePoint`s taken from the
/// same clock are subtracted into an elapsed duration via
/// [`MonotonicClock::elapsed_millis`]. The representation is
/// platform-defined: a (seconds, nanoseconds) pair on unix, a performance
/// counter tick count on windows.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePoint {
    ticks: u64,
}

#[cfg(windows)]
impl TimePoint {
    /// Sentinel for a failed clock query.
    pub const FAILED: TimePoint = TimePoint { ticks: u64::MAX };

    /// Whether this timestamp came from a failed clock query.
    pub fn is_failed(&self) -> bool {
        self.ticks == u64::MAX
    }
}

#[cfg(windows)]
fn query_clock() -> TimePoint {
    use windows_sys::Win32::System::Performance::QueryPerformanceCounter;

    let mut t: i64 = 0;

    // Compiler fences pin the clock read in place relative to the code
    // being timed. No hardware fence is implied.
    compiler_fence(Ordering::SeqCst);
    let ok = unsafe { QueryPerformanceCounter(&mut t) };
    compiler_fence(Ordering::SeqCst);

    if ok == 0 {
        return TimePoint::FAILED;
    }
    TimePoint { ticks: t as u64 }
}

#[cfg(windows)]
fn elapsed_between(start: TimePoint, now: TimePoint) -> f64 {
    use windows_sys::Win32::System::Performance::QueryPerformanceFrequency;

    let mut freq: i64 = 0;
    if unsafe { QueryPerformanceFrequency(&mut freq) } == 0 {
        return -1.0;
    }

    // Subtract in the unsigned domain, then reinterpret as signed so a
    // counter wrap still produces a sane small delta.
    let delta = now.ticks.wrapping_sub(start.ticks) as i64;
    delta as f64 / freq as f64 * 1000.0
}

/// Opaque monotonic timestamp captured by [`MonotonicClock`].
///
/// Fallback representation for targets without a dedicated backend:
/// nanoseconds since a process-wide anchor instant.
#[cfg(not(any(unix, windows)))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePoint {
    nanos: u64,
}

#[cfg(not(any(unix, windows)))]
impl TimePoint {
    /// Sentinel for a failed clock query.
    pub const FAILED: TimePoint = TimePoint { nanos: u64::MAX };

    /// Whether this timestamp came from a failed clock query.
    pub fn is_failed(&self) -> bool {
        self.nanos == u64::MAX
    }
}

#[cfg(not(any(unix, windows)))]
fn query_clock() -> TimePoint {
    use std::sync::OnceLock;
    use std::time::Instant;

    // Anchor at first use so timestamps stay comparable within a run.
    static ANCHOR: OnceLock<Instant> = OnceLock::new();
    let anchor = ANCHOR.get_or_init(Instant::now);

    compiler_fence(Ordering::SeqCst);
    let nanos = anchor.elapsed().as_nanos() as u64;
    compiler_fence(Ordering::SeqCst);

    TimePoint { nanos }
}

#[cfg(not(any(unix, windows)))]
fn elapsed_between(start: TimePoint, now: TimePoint) -> f64 {
    now.nanos.wrapping_sub(start.nanos) as i64 as f64 / 1_000_000.0
}

/// The production time source: the target's monotonic high-resolution
/// clock.
///
/// Zero-sized; each query goes straight to the OS, so there is no shared
/// state between measurements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl MonotonicClock {
    /// Create a clock handle.
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for MonotonicClock {
    type Instant = TimePoint;

    fn now(&self) -> TimePoint {
        query_clock()
    }

    fn elapsed_millis(&self, start: TimePoint) -> f64 {
        let now = query_clock();
        if start.is_failed() || now.is_failed() {
            return -1.0;
        }
        elapsed_between(start, now)
    }
}
