use crate::types::report::RepositoryRating;

pub fn to_json(ratings: &[RepositoryRating]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ratings)
}
