use crate::error::RatingError;
use crate::types::scoring::{Breakpoints, Direction, Thresholds};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

/// Check name to weight. Every entry is a required input of the aggregator.
pub type Weights = BTreeMap<String, i64>;

const CRITICAL: i64 = 20;
const HIGH: i64 = 15;
const MEDIUM: i64 = 10;
const LOW: i64 = 5;

/// Scorecard risk levels for the checks a default Scorecard run reports.
pub const DEFAULT_WEIGHTS: [(&str, i64); 18] = [
    ("Binary-Artifacts", HIGH),
    ("Branch-Protection", HIGH),
    ("CI-Tests", LOW),
    ("CII-Best-Practices", LOW),
    ("Code-Review", HIGH),
    ("Contributors", LOW),
    ("Dangerous-Workflow", CRITICAL),
    ("Dependency-Update-Tool", HIGH),
    ("Fuzzing", MEDIUM),
    ("License", LOW),
    ("Maintained", HIGH),
    ("Packaging", MEDIUM),
    ("Pinned-Dependencies", MEDIUM),
    ("SAST", MEDIUM),
    ("Security-Policy", MEDIUM),
    ("Signed-Releases", HIGH),
    ("Token-Permissions", HIGH),
    ("Vulnerabilities", HIGH),
];

/// On-disk form of the configuration. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RatingFileConfig {
    pub thresholds: Option<ThresholdsConfig>,
    pub weights: Option<Weights>,
}

/// Breakpoints as written by users. Durations are whole days.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThresholdsConfig {
    pub maturity_days: Option<Breakpoints>,
    pub activity_days: Option<Breakpoints>,
    pub popularity: Option<Breakpoints>,
    pub contributors: Option<Breakpoints>,
    pub size: Option<Breakpoints>,
    pub cyclomatic_complexity: Option<Breakpoints>,
    pub cognitive_complexity: Option<Breakpoints>,
    pub duplication: Option<Breakpoints>,
    pub code_smells: Option<Breakpoints>,
}

/// Thresholds for every tracked metric, in the units the engine bands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricThresholds {
    /// Nanoseconds since the first commit.
    pub maturity: Thresholds,
    /// Nanoseconds since the last commit.
    pub activity: Thresholds,
    pub popularity: Thresholds,
    pub contributors: Thresholds,
    pub size: Thresholds,
    /// Percentage of functions flagged as brain overload.
    pub cyclomatic_complexity: Thresholds,
    /// Mean cognitive complexity per function.
    pub cognitive_complexity: Thresholds,
    /// Duplicated lines percentage.
    pub duplication: Thresholds,
    /// Mean lines of code per code smell.
    pub code_smells: Thresholds,
}

impl Default for MetricThresholds {
    fn default() -> Self {
        use Direction::{BiggerIsBetter, SmallerIsBetter};
        Self {
            maturity: Thresholds::new(days([90, 365, 730, 1825]), BiggerIsBetter),
            activity: Thresholds::new(days([30, 180, 365, 730]), SmallerIsBetter),
            popularity: Thresholds::new([10, 100, 500, 2_000], BiggerIsBetter),
            contributors: Thresholds::new([1, 5, 20, 50], BiggerIsBetter),
            size: Thresholds::new([1_000, 10_000, 100_000, 1_000_000], SmallerIsBetter),
            cyclomatic_complexity: Thresholds::new([1, 2, 5, 10], SmallerIsBetter),
            cognitive_complexity: Thresholds::new([10, 20, 30, 50], SmallerIsBetter),
            duplication: Thresholds::new([3, 5, 10, 20], SmallerIsBetter),
            code_smells: Thresholds::new([50, 200, 500, 1_000], BiggerIsBetter),
        }
    }
}

const fn days(breakpoints: Breakpoints) -> Breakpoints {
    [
        breakpoints[0] * NANOS_PER_DAY,
        breakpoints[1] * NANOS_PER_DAY,
        breakpoints[2] * NANOS_PER_DAY,
        breakpoints[3] * NANOS_PER_DAY,
    ]
}

/// Resolved configuration handed to the engine. Immutable once built, so a
/// single instance can be shared by every scoring call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingConfig {
    pub thresholds: MetricThresholds,
    pub weights: Weights,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            thresholds: MetricThresholds::default(),
            weights: default_weights(),
        }
    }
}

pub fn default_weights() -> Weights {
    DEFAULT_WEIGHTS
        .iter()
        .map(|(name, weight)| (name.to_string(), *weight))
        .collect()
}

impl RatingFileConfig {
    pub fn validate(&self) -> Result<(), RatingError> {
        if let Some(thresholds) = &self.thresholds {
            for (key, breakpoints) in thresholds.entries() {
                if let Some(breakpoints) = breakpoints {
                    validate_breakpoints(key, breakpoints)?;
                }
            }
            for (key, breakpoints) in [
                ("maturity_days", &thresholds.maturity_days),
                ("activity_days", &thresholds.activity_days),
            ] {
                if let Some(breakpoints) = breakpoints {
                    to_nanos(key, breakpoints)?;
                }
            }
        }

        if let Some(weights) = &self.weights {
            if weights.is_empty() {
                return Err(RatingError::ConfigParse(
                    "weights must name at least one check".to_string(),
                ));
            }
            for (name, weight) in weights {
                if name.trim().is_empty() {
                    return Err(RatingError::ConfigParse(
                        "weights entries must be non-empty check names".to_string(),
                    ));
                }
                if *weight <= 0 {
                    return Err(RatingError::ConfigParse(format!(
                        "weights.{name} must be greater than 0 (found {weight})"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validates and fills every missing key with its default.
    pub fn resolve(&self) -> Result<RatingConfig, RatingError> {
        self.validate()?;
        let defaults = MetricThresholds::default();
        let thresholds = match &self.thresholds {
            Some(cfg) => MetricThresholds {
                maturity: override_days("maturity_days", cfg.maturity_days, defaults.maturity)?,
                activity: override_days("activity_days", cfg.activity_days, defaults.activity)?,
                popularity: override_with(cfg.popularity, defaults.popularity),
                contributors: override_with(cfg.contributors, defaults.contributors),
                size: override_with(cfg.size, defaults.size),
                cyclomatic_complexity: override_with(
                    cfg.cyclomatic_complexity,
                    defaults.cyclomatic_complexity,
                ),
                cognitive_complexity: override_with(
                    cfg.cognitive_complexity,
                    defaults.cognitive_complexity,
                ),
                duplication: override_with(cfg.duplication, defaults.duplication),
                code_smells: override_with(cfg.code_smells, defaults.code_smells),
            },
            None => defaults,
        };

        Ok(RatingConfig {
            thresholds,
            weights: self.weights.clone().unwrap_or_else(default_weights),
        })
    }
}

impl ThresholdsConfig {
    fn entries(&self) -> [(&'static str, &Option<Breakpoints>); 9] {
        [
            ("maturity_days", &self.maturity_days),
            ("activity_days", &self.activity_days),
            ("popularity", &self.popularity),
            ("contributors", &self.contributors),
            ("size", &self.size),
            ("cyclomatic_complexity", &self.cyclomatic_complexity),
            ("cognitive_complexity", &self.cognitive_complexity),
            ("duplication", &self.duplication),
            ("code_smells", &self.code_smells),
        ]
    }
}

impl From<&RatingConfig> for RatingFileConfig {
    fn from(config: &RatingConfig) -> Self {
        let t = &config.thresholds;
        Self {
            thresholds: Some(ThresholdsConfig {
                maturity_days: Some(t.maturity.breakpoints.map(|ns| ns / NANOS_PER_DAY)),
                activity_days: Some(t.activity.breakpoints.map(|ns| ns / NANOS_PER_DAY)),
                popularity: Some(t.popularity.breakpoints),
                contributors: Some(t.contributors.breakpoints),
                size: Some(t.size.breakpoints),
                cyclomatic_complexity: Some(t.cyclomatic_complexity.breakpoints),
                cognitive_complexity: Some(t.cognitive_complexity.breakpoints),
                duplication: Some(t.duplication.breakpoints),
                code_smells: Some(t.code_smells.breakpoints),
            }),
            weights: Some(config.weights.clone()),
        }
    }
}

fn validate_breakpoints(key: &str, breakpoints: &Breakpoints) -> Result<(), RatingError> {
    if breakpoints.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(RatingError::ConfigParse(format!(
            "thresholds.{key} must be strictly increasing (found {breakpoints:?})"
        )));
    }
    Ok(())
}

fn to_nanos(key: &str, breakpoints: &Breakpoints) -> Result<Breakpoints, RatingError> {
    let mut nanos = [0; 4];
    for (slot, days) in nanos.iter_mut().zip(breakpoints) {
        *slot = days.checked_mul(NANOS_PER_DAY).ok_or_else(|| {
            RatingError::ConfigParse(format!(
                "thresholds.{key} value {days} is too large to express in nanoseconds"
            ))
        })?;
    }
    Ok(nanos)
}

fn override_days(
    key: &str,
    breakpoints: Option<Breakpoints>,
    default: Thresholds,
) -> Result<Thresholds, RatingError> {
    match breakpoints {
        Some(days) => Ok(Thresholds::new(to_nanos(key, &days)?, default.direction)),
        None => Ok(default),
    }
}

fn override_with(breakpoints: Option<Breakpoints>, default: Thresholds) -> Thresholds {
    breakpoints
        .map(|breakpoints| Thresholds::new(breakpoints, default.direction))
        .unwrap_or(default)
}
