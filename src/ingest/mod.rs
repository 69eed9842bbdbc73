pub mod scorecard;
pub mod sonar;

use crate::error::{RatingError, Result};
use crate::types::stats::{ActivityStats, AnalysisStats, RawStats, SecurityStats};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct StatsFile {
    repository: Option<String>,
    activity: ActivityStats,
    analysis: Option<AnalysisStats>,
    security: Option<SecurityStats>,
}

/// Raw tool output that replaces sections of a stats file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub scorecard: Option<PathBuf>,
    pub sonar: Option<SonarFiles>,
}

#[derive(Debug, Clone)]
pub struct SonarFiles {
    pub measures: PathBuf,
    pub issues: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryStats {
    pub repository: String,
    pub stats: RawStats,
}

pub fn load_stats(path: &Path, overrides: &Overrides) -> Result<RepositoryStats> {
    let content = read_file(path)?;
    let file: StatsFile = serde_json::from_str(&content)
        .map_err(|e| RatingError::StatsParse(format!("{}: {}", path.display(), e)))?;

    let repository = file.repository.unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });
    info!(repository = %repository, path = %path.display(), "loaded stats");

    let analysis = match &overrides.sonar {
        Some(sonar) => {
            debug!(measures = %sonar.measures.display(), "reading sonar measures");
            let brain_overload = sonar::parse_issue_total(&read_file(&sonar.issues)?)
                .map_err(|e| in_file(&sonar.issues, e))?;
            sonar::parse_measures(&read_file(&sonar.measures)?, brain_overload)
                .map_err(|e| in_file(&sonar.measures, e))?
        }
        None => file.analysis.ok_or_else(|| {
            RatingError::StatsParse(format!("{}: missing analysis section", path.display()))
        })?,
    };

    let security = match &overrides.scorecard {
        Some(scorecard_path) => {
            debug!(scorecard = %scorecard_path.display(), "reading scorecard result");
            scorecard::parse_scorecard(&read_file(scorecard_path)?)
                .map_err(|e| in_file(scorecard_path, e))?
        }
        None => {
            let security = file.security.ok_or_else(|| {
                RatingError::StatsParse(format!("{}: missing security section", path.display()))
            })?;
            scorecard::validate_checks(&security).map_err(|e| in_file(path, e))?;
            security
        }
    };

    Ok(RepositoryStats {
        repository,
        stats: RawStats {
            activity: file.activity,
            analysis,
            security,
        },
    })
}

/// Prefixes parse failures with the file they came from.
fn in_file(path: &Path, err: RatingError) -> RatingError {
    match err {
        RatingError::Json(e) => RatingError::StatsParse(format!("{}: {}", path.display(), e)),
        RatingError::StatsParse(message) => {
            RatingError::StatsParse(format!("{}: {}", path.display(), message))
        }
        other => other,
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RatingError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
