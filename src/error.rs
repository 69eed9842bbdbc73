use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("invalid input for {metric}: {reason}")]
    InvalidInput {
        metric: &'static str,
        reason: String,
    },

    #[error("missing required check: {0}")]
    MissingCheck(String),

    #[error("division by zero: every weighted check is not applicable")]
    DivideByZero,

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("stats parse error: {0}")]
    StatsParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RatingError {
    pub(crate) fn invalid_input(metric: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            metric,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RatingError>;
