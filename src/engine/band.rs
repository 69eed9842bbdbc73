use crate::types::scoring::{Direction, Score, Thresholds};

/// Maps a raw value to a 1-5 score.
///
/// The band is the number of breakpoints strictly exceeded, so a value equal
/// to a breakpoint stays in the lower band whatever the direction. Total for
/// any input, including non-increasing breakpoints.
pub fn score(value: i64, thresholds: &Thresholds) -> Score {
    let band = thresholds
        .breakpoints
        .iter()
        .filter(|breakpoint| value > **breakpoint)
        .count() as Score;
    match thresholds.direction {
        Direction::BiggerIsBetter => band + 1,
        Direction::SmallerIsBetter => 5 - band,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const YEAR_NS: i64 = 365 * 24 * 3_600 * 1_000_000_000;

    fn bigger(breakpoints: [i64; 4]) -> Thresholds {
        Thresholds::new(breakpoints, Direction::BiggerIsBetter)
    }

    fn smaller(breakpoints: [i64; 4]) -> Thresholds {
        Thresholds::new(breakpoints, Direction::SmallerIsBetter)
    }

    fn increasing_breakpoints() -> impl Strategy<Value = [i64; 4]> {
        (
            -1_000_000i64..1_000_000,
            1i64..1_000,
            1i64..1_000,
            1i64..1_000,
        )
            .prop_map(|(b0, d1, d2, d3)| [b0, b0 + d1, b0 + d1 + d2, b0 + d1 + d2 + d3])
    }

    #[test]
    fn six_years_against_year_breakpoints_scores_three() {
        let thresholds = bigger([YEAR_NS, 5 * YEAR_NS, 10 * YEAR_NS, 20 * YEAR_NS]);
        assert_eq!(score(6 * YEAR_NS, &thresholds), 3);
    }

    #[test]
    fn bigger_is_better_covers_every_band() {
        let thresholds = bigger([10, 20, 30, 40]);
        assert_eq!(score(i64::MIN, &thresholds), 1);
        assert_eq!(score(10, &thresholds), 1);
        assert_eq!(score(11, &thresholds), 2);
        assert_eq!(score(25, &thresholds), 3);
        assert_eq!(score(40, &thresholds), 4);
        assert_eq!(score(41, &thresholds), 5);
        assert_eq!(score(i64::MAX, &thresholds), 5);
    }

    #[test]
    fn smaller_is_better_covers_every_band() {
        let thresholds = smaller([10, 20, 30, 40]);
        assert_eq!(score(-5, &thresholds), 5);
        assert_eq!(score(10, &thresholds), 5);
        assert_eq!(score(11, &thresholds), 4);
        assert_eq!(score(30, &thresholds), 3);
        assert_eq!(score(31, &thresholds), 2);
        assert_eq!(score(1_000, &thresholds), 1);
    }

    #[test]
    fn non_increasing_breakpoints_still_yield_a_score() {
        let thresholds = bigger([40, 30, 20, 10]);
        assert_eq!(score(25, &thresholds), 3);
        let thresholds = smaller([5, 5, 5, 5]);
        assert_eq!(score(5, &thresholds), 5);
        assert_eq!(score(6, &thresholds), 1);
    }

    proptest! {
        #[test]
        fn score_stays_within_one_to_five(value in any::<i64>(), breakpoints in increasing_breakpoints()) {
            for thresholds in [bigger(breakpoints), smaller(breakpoints)] {
                let s = score(value, &thresholds);
                prop_assert!((1..=5).contains(&s));
            }
        }

        #[test]
        fn bigger_is_better_is_monotonic(
            a in -2_000_000i64..2_000_000,
            b in -2_000_000i64..2_000_000,
            breakpoints in increasing_breakpoints(),
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let thresholds = bigger(breakpoints);
            prop_assert!(score(low, &thresholds) <= score(high, &thresholds));
        }

        #[test]
        fn smaller_is_better_is_antitonic(
            a in -2_000_000i64..2_000_000,
            b in -2_000_000i64..2_000_000,
            breakpoints in increasing_breakpoints(),
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let thresholds = smaller(breakpoints);
            prop_assert!(score(low, &thresholds) >= score(high, &thresholds));
        }

        #[test]
        fn breakpoint_value_stays_in_lower_band(breakpoints in increasing_breakpoints()) {
            for thresholds in [bigger(breakpoints), smaller(breakpoints)] {
                for breakpoint in breakpoints {
                    prop_assert_eq!(score(breakpoint, &thresholds), score(breakpoint - 1, &thresholds));
                }
            }
        }
    }
}
