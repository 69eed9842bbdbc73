use crate::error::{RatingError, Result};
use crate::types::stats::{SecurityStats, NOT_APPLICABLE};

const MAX_CHECK_SCORE: i64 = 10;

/// Parses a Scorecard `--format=json` result.
pub fn parse_scorecard(content: &str) -> Result<SecurityStats> {
    let stats: SecurityStats = serde_json::from_str(content)?;
    validate_checks(&stats)?;
    Ok(stats)
}

pub(crate) fn validate_checks(stats: &SecurityStats) -> Result<()> {
    for check in &stats.checks {
        if !(NOT_APPLICABLE..=MAX_CHECK_SCORE).contains(&check.score) {
            return Err(RatingError::StatsParse(format!(
                "check {} has score {} outside [{NOT_APPLICABLE}, {MAX_CHECK_SCORE}]",
                check.name, check.score
            )));
        }
    }
    Ok(())
}
