//! Score calculation and aggregation

use std::time::Duration;

/// Integer score for one worker
///
/// `base = 10000 / (1 + raw / 1000)` and `time_bonus = 10000 / (elapsed_ms + 1)`.
/// The sum is floored and clamped at 0; a `raw` below -1000 gives a negative
/// base that the clamp absorbs.
///
/// A non-finite base (NaN raw, or the pole at `raw == -1000`) contributes
/// nothing, leaving only the time bonus. Finite sums beyond `u64::MAX`
/// saturate.
pub fn score(raw: f64, elapsed: Duration) -> u64 {
    let base = 10_000.0 / (1.0 + raw / 1_000.0);
    let base = if base.is_finite() { base } else { 0.0 };
    let elapsed_ms = elapsed.as_millis() as f64;
    let time_bonus = 10_000.0 / (elapsed_ms + 1.0);

    (base + time_bonus).floor().max(0.0) as u64
}

/// Total of per-worker scores; order-independent
pub fn aggregate(scores: &[u64]) -> u64 {
    scores
        .iter()
        .fold(0u64, |total, &score| total.saturating_add(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_reference_point() {
        // base 1666.67 + bonus 9.99
        assert_eq!(score(5000.0, Duration::from_millis(1000)), 1676);
    }

    #[test]
    fn test_score_upper_bound_at_zero() {
        assert_eq!(score(0.0, Duration::ZERO), 20_000);
    }

    #[test]
    fn test_score_non_negative() {
        let raws = [0.0, 1.0, 999.5, 1e6, 1e12, f64::MAX, f64::INFINITY];
        let elapsed = [0, 1, 999, 60_000, u32::MAX as u64];
        for raw in raws {
            for ms in elapsed {
                // u64 cannot be negative; make sure nothing saturates weirdly either
                let s = score(raw, Duration::from_millis(ms));
                assert!(s <= 20_000, "score({raw}, {ms}ms) = {s}");
            }
        }
    }

    #[test]
    fn test_score_monotonic_in_raw() {
        let elapsed = Duration::from_millis(2500);
        let mut previous = u64::MAX;
        for raw in [0.0, 10.0, 500.0, 1_000.0, 5_000.0, 1e5, 1e9] {
            let s = score(raw, elapsed);
            assert!(s <= previous, "score rose at raw={raw}");
            previous = s;
        }
    }

    #[test]
    fn test_score_monotonic_in_elapsed() {
        let mut previous = u64::MAX;
        for ms in [0, 1, 5, 100, 1_000, 30_000, 600_000] {
            let s = score(5000.0, Duration::from_millis(ms));
            assert!(s <= previous, "score rose at elapsed={ms}ms");
            previous = s;
        }
    }

    #[test]
    fn test_score_below_minus_thousand_clamps_to_zero() {
        let elapsed = Duration::from_millis(1000);
        // base -2500 + bonus 9.99
        assert_eq!(score(-5000.0, elapsed), 0);
        // default workload accumulator; base -30137
        assert_eq!(score(-1331.73, elapsed), 0);
    }

    #[test]
    fn test_score_small_negative_raw_raises_base() {
        let elapsed = Duration::from_millis(1000);
        // base 20000 + bonus 9.99
        assert_eq!(score(-500.0, elapsed), 20_009);
        // base 10295.5 + bonus 9.99
        assert_eq!(score(-28.7, elapsed), 10_305);
        assert!(score(-28.7, elapsed) > score(28.7, elapsed));
    }

    #[test]
    fn test_score_pole_keeps_time_bonus() {
        assert_eq!(score(-1000.0, Duration::from_millis(999)), 10);
        assert_eq!(score(-1000.0, Duration::ZERO), 10_000);
    }

    #[test]
    fn test_score_nan_raw_keeps_time_bonus() {
        assert_eq!(score(f64::NAN, Duration::from_millis(999)), 10);
    }

    #[test]
    fn test_aggregate_permutation_invariant() {
        let (a, b, c) = (1676, 20_000, 3);
        assert_eq!(aggregate(&[a, b, c]), aggregate(&[c, a, b]));
        assert_eq!(aggregate(&[a, b, c]), 21_679);
    }

    #[test]
    fn test_aggregate_empty_and_saturating() {
        assert_eq!(aggregate(&[]), 0);
        assert_eq!(aggregate(&[u64::MAX, 1]), u64::MAX);
    }
}
