pub mod aggregate;
pub mod band;
pub mod preprocess;

use crate::error::Result;
use crate::types::config::RatingConfig;
use crate::types::scoring::{
    CommunityScores, ProjectScores, Score, SecurityScores, TechScores, Thresholds,
};
use crate::types::stats::RawStats;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Scores one repository. Pure apart from debug events; elapsed durations are
/// measured against `now`.
pub fn compute_scores(
    stats: &RawStats,
    config: &RatingConfig,
    now: DateTime<Utc>,
) -> Result<ProjectScores> {
    let derived = preprocess::derive(&stats.activity, &stats.analysis, now)?;
    let t = &config.thresholds;

    let community = CommunityScores {
        maturity: banded("maturity", derived.maturity, &t.maturity),
        activity: banded("activity", derived.activity, &t.activity),
        popularity: banded("popularity", derived.popularity, &t.popularity),
        contributors: banded("contributors", derived.contributors, &t.contributors),
    };
    let tech = TechScores {
        size: banded("size", derived.size, &t.size),
        cyclomatic_complexity: banded(
            "cyclomatic_complexity",
            derived.cyclomatic_complexity,
            &t.cyclomatic_complexity,
        ),
        cognitive_complexity: banded(
            "cognitive_complexity",
            derived.cognitive_complexity,
            &t.cognitive_complexity,
        ),
        duplication: banded("duplication", derived.duplication, &t.duplication),
        code_smells: banded("code_smells", derived.code_smells, &t.code_smells),
    };
    let score_card = aggregate::aggregate(&stats.security.checks, &config.weights)?;
    debug!(score_card, "aggregated security checks");

    Ok(ProjectScores {
        community,
        tech,
        security: SecurityScores { score_card },
    })
}

fn banded(metric: &str, value: i64, thresholds: &Thresholds) -> Score {
    let score = band::score(value, thresholds);
    debug!(metric, value, score, "banded metric");
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RatingError;
    use crate::types::config::Weights;
    use crate::types::stats::{ActivityStats, AnalysisStats, SecurityCheck, SecurityStats};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn stats() -> RawStats {
        RawStats {
            activity: ActivityStats {
                first_commit: now() - Duration::days(1_000),
                last_commit: now() - Duration::days(10),
                stars: 2_500,
                active_contributors: 3,
            },
            analysis: AnalysisStats {
                lines_of_code: 10_000,
                functions: 500,
                code_smells: 20,
                brain_overload_functions: 15,
                cyclomatic_complexity: 4_000,
                cognitive_complexity: 6_000,
                duplicated_lines_density: 0.4,
            },
            security: SecurityStats {
                checks: vec![
                    SecurityCheck::new("Binary-Artifacts", 5),
                    SecurityCheck::new("CI-Tests", -1),
                    SecurityCheck::new("Webhooks", 10),
                ],
            },
        }
    }

    fn config() -> RatingConfig {
        let weights: Weights = [("Binary-Artifacts", 1), ("CI-Tests", 1)]
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect();
        RatingConfig {
            weights,
            ..RatingConfig::default()
        }
    }

    #[test]
    fn assembles_every_score() {
        let scores = compute_scores(&stats(), &config(), now()).expect("stats are valid");

        // 1000 days is past 730 but not 1825
        assert_eq!(scores.community.maturity, 4);
        assert_eq!(scores.community.activity, 5);
        assert_eq!(scores.community.popularity, 5);
        assert_eq!(scores.community.contributors, 2);
        // equal to the 10_000 breakpoint, stays in the lower band
        assert_eq!(scores.tech.size, 4);
        // 3% of functions overloaded
        assert_eq!(scores.tech.cyclomatic_complexity, 3);
        // 12 per function
        assert_eq!(scores.tech.cognitive_complexity, 4);
        assert_eq!(scores.tech.duplication, 5);
        // 500 lines per smell equals the 500 breakpoint
        assert_eq!(scores.tech.code_smells, 3);
        assert_eq!(scores.security.score_card, 3);
    }

    #[test]
    fn identical_inputs_give_identical_scores() {
        let first = compute_scores(&stats(), &config(), now()).expect("stats are valid");
        let second = compute_scores(&stats(), &config(), now()).expect("stats are valid");
        assert_eq!(first, second);
    }

    #[test]
    fn zero_functions_aborts_scoring() {
        let mut stats = stats();
        stats.analysis.functions = 0;
        let err = compute_scores(&stats, &config(), now()).expect_err("no scores");
        assert!(matches!(err, RatingError::InvalidInput { .. }));
    }

    #[test]
    fn missing_weighted_check_aborts_scoring() {
        let mut stats = stats();
        stats
            .security
            .checks
            .retain(|check| check.name != "CI-Tests");
        let err = compute_scores(&stats, &config(), now()).expect_err("no scores");
        assert!(matches!(err, RatingError::MissingCheck(ref name) if name == "CI-Tests"));
    }

    #[test]
    fn default_weights_require_the_full_scorecard() {
        let err = compute_scores(&stats(), &RatingConfig::default(), now())
            .expect_err("default weights need every scorecard check");
        assert!(matches!(err, RatingError::MissingCheck(_)));
    }
}
