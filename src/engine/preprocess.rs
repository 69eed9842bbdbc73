use crate::error::{RatingError, Result};
use crate::types::stats::{ActivityStats, AnalysisStats};
use chrono::{DateTime, Utc};

/// Scalars each metric's thresholds are calibrated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub maturity: i64,
    pub activity: i64,
    pub popularity: i64,
    pub contributors: i64,
    pub size: i64,
    pub cyclomatic_complexity: i64,
    pub cognitive_complexity: i64,
    pub duplication: i64,
    pub code_smells: i64,
}

pub fn derive(
    activity: &ActivityStats,
    analysis: &AnalysisStats,
    now: DateTime<Utc>,
) -> Result<DerivedMetrics> {
    Ok(DerivedMetrics {
        maturity: elapsed_nanos("maturity", activity.first_commit, now)?,
        activity: elapsed_nanos("activity", activity.last_commit, now)?,
        popularity: activity.stars,
        contributors: activity.active_contributors,
        size: analysis.lines_of_code,
        cyclomatic_complexity: overload_percentage(analysis)?,
        cognitive_complexity: ratio(
            "cognitive_complexity",
            analysis.cognitive_complexity,
            analysis.functions,
            "function count is zero",
        )?,
        duplication: truncated_density(analysis.duplicated_lines_density)?,
        code_smells: ratio(
            "code_smells",
            analysis.lines_of_code,
            analysis.code_smells,
            "code smell count is zero",
        )?,
    })
}

/// Negative when `since` lies after `now`.
fn elapsed_nanos(metric: &'static str, since: DateTime<Utc>, now: DateTime<Utc>) -> Result<i64> {
    now.signed_duration_since(since)
        .num_nanoseconds()
        .ok_or_else(|| {
            RatingError::invalid_input(
                metric,
                format!("elapsed time since {since} does not fit in nanoseconds"),
            )
        })
}

fn overload_percentage(analysis: &AnalysisStats) -> Result<i64> {
    const METRIC: &str = "cyclomatic_complexity";
    let scaled = analysis
        .brain_overload_functions
        .checked_mul(100)
        .ok_or_else(|| RatingError::invalid_input(METRIC, "brain overload count overflows"))?;
    ratio(METRIC, scaled, analysis.functions, "function count is zero")
}

/// Truncating division that refuses a zero divisor.
fn ratio(metric: &'static str, numerator: i64, divisor: i64, zero_reason: &str) -> Result<i64> {
    if divisor == 0 {
        return Err(RatingError::invalid_input(metric, zero_reason));
    }
    numerator.checked_div(divisor).ok_or_else(|| {
        RatingError::invalid_input(metric, format!("{numerator} / {divisor} overflows"))
    })
}

fn truncated_density(density: f64) -> Result<i64> {
    if !density.is_finite() {
        return Err(RatingError::invalid_input(
            "duplication",
            format!("duplicated lines density is not a finite number ({density})"),
        ));
    }
    Ok(density.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn activity() -> ActivityStats {
        ActivityStats {
            first_commit: now() - Duration::days(1_000),
            last_commit: now() - Duration::days(3),
            stars: 420,
            active_contributors: 7,
        }
    }

    fn analysis() -> AnalysisStats {
        AnalysisStats {
            lines_of_code: 10_000,
            functions: 400,
            code_smells: 20,
            brain_overload_functions: 9,
            cyclomatic_complexity: 2_000,
            cognitive_complexity: 1_799,
            duplicated_lines_density: 4.9,
        }
    }

    #[test]
    fn derives_every_metric() {
        let derived = derive(&activity(), &analysis(), now()).expect("stats are valid");
        assert_eq!(derived.maturity, Duration::days(1_000).num_nanoseconds().unwrap());
        assert_eq!(derived.activity, Duration::days(3).num_nanoseconds().unwrap());
        assert_eq!(derived.popularity, 420);
        assert_eq!(derived.contributors, 7);
        assert_eq!(derived.size, 10_000);
        assert_eq!(derived.cyclomatic_complexity, 2);
        assert_eq!(derived.cognitive_complexity, 4);
        assert_eq!(derived.duplication, 4);
        assert_eq!(derived.code_smells, 500);
    }

    #[test]
    fn zero_functions_is_invalid_input() {
        let mut stats = analysis();
        stats.functions = 0;
        let err = derive(&activity(), &stats, now()).expect_err("ratio is undefined");
        assert!(matches!(
            err,
            RatingError::InvalidInput {
                metric: "cyclomatic_complexity",
                ..
            }
        ));
    }

    #[test]
    fn zero_functions_fails_the_cognitive_ratio() {
        let err = ratio("cognitive_complexity", 1_799, 0, "function count is zero")
            .expect_err("ratio is undefined");
        assert_eq!(
            err.to_string(),
            "invalid input for cognitive_complexity: function count is zero"
        );
    }

    #[test]
    fn overflowing_division_is_not_reported_as_zero_divisor() {
        let err = ratio("cognitive_complexity", i64::MIN, -1, "function count is zero")
            .expect_err("division overflows");
        assert!(err.to_string().contains("overflows"));
        assert!(!err.to_string().contains("is zero"));
    }

    #[test]
    fn zero_code_smells_is_invalid_input() {
        let mut stats = analysis();
        stats.code_smells = 0;
        let err = derive(&activity(), &stats, now()).expect_err("ratio is undefined");
        assert!(matches!(
            err,
            RatingError::InvalidInput {
                metric: "code_smells",
                ..
            }
        ));
    }

    #[test]
    fn non_finite_density_is_invalid_input() {
        let mut stats = analysis();
        stats.duplicated_lines_density = f64::NAN;
        let err = derive(&activity(), &stats, now()).expect_err("density is not a number");
        assert!(err.to_string().contains("duplication"));
    }

    #[test]
    fn overflowing_overload_count_is_invalid_input() {
        let mut stats = analysis();
        stats.brain_overload_functions = i64::MAX;
        assert!(derive(&activity(), &stats, now()).is_err());
    }

    #[test]
    fn commit_after_now_gives_negative_elapsed() {
        let mut stats = activity();
        stats.last_commit = now() + Duration::days(1);
        let derived = derive(&stats, &analysis(), now()).expect("stats are valid");
        assert!(derived.activity < 0);
    }

    #[test]
    fn elapsed_beyond_nanosecond_range_is_invalid_input() {
        let mut stats = activity();
        stats.first_commit = Utc.with_ymd_and_hms(1600, 1, 1, 0, 0, 0).unwrap();
        let err = derive(&stats, &analysis(), now()).expect_err("duration overflows");
        assert!(matches!(
            err,
            RatingError::InvalidInput {
                metric: "maturity",
                ..
            }
        ));
    }
}
