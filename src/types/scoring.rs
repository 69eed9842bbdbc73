use serde::{Deserialize, Serialize};

pub type Score = u8;

/// Which end of a metric's scale earns the higher score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    BiggerIsBetter,
    SmallerIsBetter,
}

/// Four ascending breakpoints delimiting five bands:
/// `(-inf, b0]`, `(b0, b1]`, `(b1, b2]`, `(b2, b3]`, `(b3, +inf)`.
pub type Breakpoints = [i64; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub breakpoints: Breakpoints,
    pub direction: Direction,
}

impl Thresholds {
    pub const fn new(breakpoints: Breakpoints, direction: Direction) -> Self {
        Self {
            breakpoints,
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommunityScores {
    pub maturity: Score,
    pub activity: Score,
    pub popularity: Score,
    pub contributors: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechScores {
    pub size: Score,
    pub cyclomatic_complexity: Score,
    pub cognitive_complexity: Score,
    pub duplication: Score,
    pub code_smells: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityScores {
    /// Composite of the weighted Scorecard checks. Not clamped to 1-5:
    /// check scores of 0-10 yield 0-5.
    pub score_card: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectScores {
    pub community: CommunityScores,
    pub tech: TechScores,
    pub security: SecurityScores,
}
