pub mod json;
pub mod md;

use crate::error::RatingError;
use crate::types::report::RepositoryRating;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(ratings: &[RepositoryRating], format: OutputFormat) -> Result<String, RatingError> {
    match format {
        OutputFormat::Json => json::to_json(ratings).map_err(RatingError::Json),
        OutputFormat::Md => Ok(md::to_markdown(ratings)),
    }
}
