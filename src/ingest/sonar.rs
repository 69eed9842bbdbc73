use crate::error::{RatingError, Result};
use crate::types::stats::AnalysisStats;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct MeasuresResponse {
    component: Component,
}

#[derive(Debug, Deserialize)]
struct Component {
    #[serde(default)]
    measures: Vec<Measure>,
}

#[derive(Debug, Deserialize)]
struct Measure {
    metric: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct IssuesResponse {
    total: i64,
}

const INTEGER_METRICS: [&str; 5] = [
    "ncloc",
    "functions",
    "code_smells",
    "complexity",
    "cognitive_complexity",
];
const DENSITY_METRIC: &str = "duplicated_lines_density";

/// Total of an `api/issues/search` response filtered on brain-overload issues.
pub fn parse_issue_total(issues: &str) -> Result<i64> {
    let response: IssuesResponse = serde_json::from_str(issues)?;
    Ok(response.total)
}

/// Builds analysis stats from an `api/measures/component` response.
///
/// Measures the server did not report stay at zero.
pub fn parse_measures(measures: &str, brain_overload_functions: i64) -> Result<AnalysisStats> {
    let response: MeasuresResponse = serde_json::from_str(measures)?;

    let mut stats = AnalysisStats {
        lines_of_code: 0,
        functions: 0,
        code_smells: 0,
        brain_overload_functions,
        cyclomatic_complexity: 0,
        cognitive_complexity: 0,
        duplicated_lines_density: 0.0,
    };

    for measure in &response.component.measures {
        let slot = match measure.metric.as_str() {
            "ncloc" => &mut stats.lines_of_code,
            "functions" => &mut stats.functions,
            "code_smells" => &mut stats.code_smells,
            "complexity" => &mut stats.cyclomatic_complexity,
            "cognitive_complexity" => &mut stats.cognitive_complexity,
            DENSITY_METRIC => {
                stats.duplicated_lines_density =
                    measure.value.parse::<f64>().map_err(|e| {
                        RatingError::StatsParse(format!(
                            "invalid {DENSITY_METRIC} value {:?}: {e}",
                            measure.value
                        ))
                    })?;
                continue;
            }
            _ => continue,
        };
        *slot = measure.value.parse::<i64>().map_err(|e| {
            RatingError::StatsParse(format!(
                "invalid {} value {:?}: {e}",
                measure.metric, measure.value
            ))
        })?;
    }

    for metric in INTEGER_METRICS.into_iter().chain([DENSITY_METRIC]) {
        if !response
            .component
            .measures
            .iter()
            .any(|measure| measure.metric == metric)
        {
            warn!(metric, "measure missing from sonar response");
        }
    }

    Ok(stats)
}
