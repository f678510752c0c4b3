//! End-to-end tests against the real platform clock.

use microbench::{clock, microbench, measure_statistics, TimePoint};

/// Basic smoke test that the API works.
#[test]
fn smoke_test() {
    let fastest = microbench(|| std::hint::black_box(1 + 1));
    // A sane clock yields a non-negative block time; -1.0 would mean a
    // clock fault on this machine.
    assert!(fastest >= 0.0, "fastest = {}", fastest);
}

#[test]
fn real_measurement_orders_its_quartiles() {
    let stats = measure_statistics(
        || {
            let mut sum = 0u64;
            for i in 0..500 {
                sum = sum.wrapping_add(std::hint::black_box(i));
            }
            sum
        },
        20,
        30,
        true,
    );

    assert!(stats.min() <= stats.q1());
    assert!(stats.q1() <= stats.median());
    assert!(stats.median() <= stats.q3());
    assert!(stats.q3() <= stats.max());
    assert!((stats.range() - (stats.max() - stats.min())).abs() < 1e-12);
}

#[test]
fn clock_free_functions_work() {
    let start = clock::now();
    assert!(!start.is_failed());

    clock::sleep_millis(2);
    let elapsed = clock::elapsed_millis(start);
    assert!(elapsed >= 1.0, "elapsed = {}", elapsed);
}

#[test]
fn failed_time_point_yields_exactly_minus_one() {
    assert_eq!(clock::elapsed_millis(TimePoint::FAILED), -1.0);
}
