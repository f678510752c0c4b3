//! Reference-value tests for the statistics reduction.

use microbench::Stats;

fn stats_of(values: &[f64]) -> Stats {
    let mut samples = values.to_vec();
    Stats::from_samples(&mut samples)
}

#[test]
fn single_sample_degenerates_to_that_sample() {
    let stats = stats_of(&[0.125]);
    assert_eq!(stats.min(), 0.125);
    assert_eq!(stats.max(), 0.125);
    assert_eq!(stats.avg(), 0.125);
    assert_eq!(stats.q1(), 0.125);
    assert_eq!(stats.median(), 0.125);
    assert_eq!(stats.q3(), 0.125);
    assert_eq!(stats.variance(), 0.0);
}

#[test]
fn quartiles_cover_all_count_mod_four_branches() {
    // n % 4 == 0
    let s = stats_of(&[1.0, 2.0, 3.0, 4.0]);
    assert!((s.q1() - 1.5).abs() < 1e-12);
    assert!((s.median() - 2.5).abs() < 1e-12);
    assert!((s.q3() - 3.5).abs() < 1e-12);

    // n % 4 == 1
    let s = stats_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!((s.median() - 3.0).abs() < 1e-12);

    // n % 4 == 2
    let s = stats_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert!((s.q1() - 2.0).abs() < 1e-12);
    assert!((s.median() - 3.5).abs() < 1e-12);
    assert!((s.q3() - 5.0).abs() < 1e-12);

    // n % 4 == 3
    let s = stats_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    assert!((s.median() - 4.0).abs() < 1e-12);
}

#[test]
fn quartiles_are_monotonic_across_sizes() {
    // Pseudo-random but deterministic values across every n mod 4 branch.
    for n in 2..64usize {
        let values: Vec<f64> = (0..n).map(|i| ((i * 37 + 11) % 23) as f64 * 0.75).collect();
        let stats = stats_of(&values);
        assert!(stats.min() <= stats.q1(), "n = {}", n);
        assert!(stats.q1() <= stats.median(), "n = {}", n);
        assert!(stats.median() <= stats.q3(), "n = {}", n);
        assert!(stats.q3() <= stats.max(), "n = {}", n);
    }
}

#[test]
fn compensated_average_tracks_reference_for_large_sets() {
    // 10k timing-scale values; reference computed exactly in integer
    // microsecond units.
    let values: Vec<f64> = (0..10_000)
        .map(|i| 0.001 * ((i % 997) as f64) + 0.5)
        .collect();
    let stats = stats_of(&values);

    let reference_sum_us: i64 = values.iter().map(|&v| (v * 1000.0).round() as i64).sum();
    let reference = reference_sum_us as f64 / 1000.0 / values.len() as f64;

    assert!((stats.avg() - reference).abs() < 1e-10);
}

#[test]
fn stats_serialize_to_json() {
    let stats = stats_of(&[1.0, 2.0, 3.0, 4.0]);
    let json = serde_json::to_string(&stats).expect("Should serialize");
    assert!(json.contains("median"));
    assert!(json.contains("variance"));

    let back: Stats = serde_json::from_str(&json).expect("Should deserialize");
    assert_eq!(back, stats);
}
