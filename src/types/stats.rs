use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Score Scorecard reports for a check that does not apply to a repository.
pub const NOT_APPLICABLE: i64 = -1;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityStats {
    pub first_commit: DateTime<Utc>,
    pub last_commit: DateTime<Utc>,
    pub stars: i64,
    pub active_contributors: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisStats {
    pub lines_of_code: i64,
    pub functions: i64,
    pub code_smells: i64,
    pub brain_overload_functions: i64,
    pub cyclomatic_complexity: i64,
    pub cognitive_complexity: i64,
    /// Percentage of duplicated lines, as reported by the analyzer.
    pub duplicated_lines_density: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SecurityCheck {
    pub name: String,
    pub score: i64,
}

impl SecurityCheck {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn is_applicable(&self) -> bool {
        self.score != NOT_APPLICABLE
    }
}

/// Same shape as the top level of a Scorecard `--format=json` result; any
/// other field Scorecard emits is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SecurityStats {
    #[serde(default)]
    pub checks: Vec<SecurityCheck>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawStats {
    pub activity: ActivityStats,
    pub analysis: AnalysisStats,
    pub security: SecurityStats,
}
