use crate::types::scoring::ProjectScores;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryRating {
    pub repository: String,
    pub scores: ProjectScores,
}
